//! Function lookup table CLI
//!
//! Usage: fn_table --fn <sin|cos|tan|x2|x3> -s <steps> -f <final> [options]
//! Example: fn_table --fn sin -s 90 -f 90 --float

mod common;

use clap::Parser;
use hashcube::constants::{DEFAULT_TABLE_COLUMNS, DEFAULT_TABLE_INITIAL};
use hashcube::{AngleUnit, TableFunction, TableOptions, build_table};

/// Lookup table generator for sin, cos, tan, x^2 and x^3
#[derive(Parser, Debug)]
#[command(name = "fn_table", version, long_about = None)]
struct Cli {
    /// Function to tabulate: sin, cos, tan, x2, x3
    #[arg(long = "fn", value_name = "FUNCTION")]
    function: TableFunction,

    /// Number of steps between the initial and final value
    #[arg(short = 's', long = "steps")]
    steps: u32,

    /// Final (stop) value
    #[arg(short = 'f', long = "final", visible_alias = "stop", allow_negative_numbers = true)]
    final_value: f64,

    /// Angle unit for trigonometric functions: deg or rad
    #[arg(short = 'a', long = "angle", default_value = "deg")]
    angle: AngleUnit,

    /// Initial (start) value
    #[arg(short = 'i', long = "initial", visible_alias = "start", default_value_t = DEFAULT_TABLE_INITIAL, allow_negative_numbers = true)]
    initial: f64,

    /// Number of values per output row
    #[arg(short = 'c', long = "columns", visible_alias = "cols", default_value_t = DEFAULT_TABLE_COLUMNS)]
    columns: usize,

    /// Append an 'f' to every value
    #[arg(long = "float")]
    float: bool,
}

impl Cli {
    fn options(&self) -> TableOptions {
        TableOptions::new(self.function, self.steps, self.final_value)
            .with_angle_unit(self.angle)
            .with_initial(self.initial)
            .with_columns(self.columns)
            .with_float_suffix(self.float)
    }
}

fn main() {
    let cli = Cli::parse();
    common::init_logging();

    match build_table(&cli.options()) {
        Ok(table) => println!("{}", table),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
