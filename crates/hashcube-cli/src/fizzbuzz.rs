//! FizzBuzz generator CLI
//!
//! Usage: fizzbuzz [options]
//! Example: fizzbuzz -s 1 -e 15 -d ", "
//!
//! Exit codes:
//!   0  Success
//!   1  Number format error
//!   2  Invalid numbers (start greater than end, zero multiple)
//!   3  Missing argument value
//!   4  Invalid argument
//!   5  File error in headless mode without terminal fallback

mod common;

use clap::Parser;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use hashcube::constants::{
    DEFAULT_BUZZ_MULTIPLE, DEFAULT_BUZZ_TEXT, DEFAULT_FIZZ_MULTIPLE, DEFAULT_FIZZ_TEXT,
    DEFAULT_FIZZBUZZ_DELIMITER, DEFAULT_FIZZBUZZ_END, DEFAULT_FIZZBUZZ_START,
};
use hashcube::domain::fizzbuzz::{FizzBuzzError, FizzBuzzOptions, generate};
use hashcube::infra::text_io::write_text;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const EXIT_NUMBER_FORMAT: i32 = 1;
const EXIT_INVALID_NUMBER: i32 = 2;
const EXIT_MISSING_ARGUMENT: i32 = 3;
const EXIT_INVALID_ARGUMENT: i32 = 4;
const EXIT_FILE_ERROR: i32 = 5;

/// FizzBuzz sequence generator
#[derive(Parser, Debug)]
#[command(name = "fizzbuzz", version, long_about = None)]
struct Cli {
    /// Multiple that produces "Fizz"
    #[arg(short = 'f', long = "fizz", default_value_t = DEFAULT_FIZZ_MULTIPLE, allow_negative_numbers = true)]
    fizz: i64,

    /// Multiple that produces "Buzz"
    #[arg(short = 'b', long = "buzz", default_value_t = DEFAULT_BUZZ_MULTIPLE, allow_negative_numbers = true)]
    buzz: i64,

    /// Text printed for "Fizz" numbers
    #[arg(long = "fizz-text", default_value = DEFAULT_FIZZ_TEXT)]
    fizz_text: String,

    /// Text printed for "Buzz" numbers
    #[arg(long = "buzz-text", default_value = DEFAULT_BUZZ_TEXT)]
    buzz_text: String,

    /// First number
    #[arg(short = 's', long = "start", default_value_t = DEFAULT_FIZZBUZZ_START, allow_negative_numbers = true)]
    start: i64,

    /// Last number (inclusive)
    #[arg(short = 'e', long = "end", default_value_t = DEFAULT_FIZZBUZZ_END, allow_negative_numbers = true)]
    end: i64,

    /// Separator between values (default: newline)
    #[arg(short = 'd', long = "delimiter")]
    delimiter: Option<String>,

    /// Write the sequence to a file instead of standard output
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// On file errors print to standard output (y) or abort (n) without asking
    #[arg(
        long = "headless-print",
        value_parser = PossibleValuesParser::new(["y", "n"]).map(|v| v == "y")
    )]
    headless_print: Option<bool>,
}

impl Cli {
    fn options(&self) -> FizzBuzzOptions {
        FizzBuzzOptions::default()
            .with_range(self.start, self.end)
            .with_multiples(self.fizz, self.buzz)
            .with_words(&self.fizz_text, &self.buzz_text)
            .with_delimiter(
                self.delimiter
                    .as_deref()
                    .unwrap_or(DEFAULT_FIZZBUZZ_DELIMITER),
            )
    }
}

fn exit_code_for(err: &clap::Error) -> i32 {
    let missing_value = matches!(
        err.get(ContextKind::InvalidValue),
        Some(ContextValue::String(value)) if value.is_empty()
    );

    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        ErrorKind::ValueValidation => EXIT_NUMBER_FORMAT,
        ErrorKind::InvalidValue if missing_value => EXIT_MISSING_ARGUMENT,
        ErrorKind::MissingRequiredArgument => EXIT_MISSING_ARGUMENT,
        _ => EXIT_INVALID_ARGUMENT,
    }
}

fn exit_code_for_options(err: &FizzBuzzError) -> i32 {
    match err {
        FizzBuzzError::InvalidRange { .. } | FizzBuzzError::ZeroMultiple => EXIT_INVALID_NUMBER,
    }
}

/// Handling of an output file that cannot be written
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FileFallback {
    /// Ask on stdin whether to print to the terminal
    Ask,
    Print,
    Abort,
}

impl FileFallback {
    fn from_headless_print(headless_print: Option<bool>) -> Self {
        match headless_print {
            None => Self::Ask,
            Some(true) => Self::Print,
            Some(false) => Self::Abort,
        }
    }

    /// Process exit code, if this fallback ends the program
    fn exit_code(self) -> Option<i32> {
        match self {
            Self::Abort => Some(EXIT_FILE_ERROR),
            Self::Ask | Self::Print => None,
        }
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{}", prompt);
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).is_ok() && answer.trim().eq_ignore_ascii_case("y")
}

fn write_output(path: &Path, output: &str, headless_print: Option<bool>) {
    let Err(e) = write_text(path, output) else {
        return;
    };
    tracing::warn!(path = %path.display(), error = %e, "could not write output file");

    let fallback = FileFallback::from_headless_print(headless_print);
    if let Some(code) = fallback.exit_code() {
        eprintln!("File error: {}. Aborting.", e);
        std::process::exit(code);
    }

    if fallback == FileFallback::Print
        || confirm("There was a problem opening the output file, print to the terminal? [y/N]: ")
    {
        println!("{}", output);
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = exit_code_for(&e);
            e.print().ok();
            std::process::exit(code);
        }
    };

    common::init_logging();

    let output = match generate(&cli.options()) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_code_for_options(&e));
        }
    };

    match &cli.output {
        Some(path) => write_output(path, &output, cli.headless_print),
        None => println!("{}", output),
    }
}
