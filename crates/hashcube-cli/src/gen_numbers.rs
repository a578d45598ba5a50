//! Random number file CLI
//!
//! Usage: gen_numbers <count> <file> [--seed N] [--binary]
//! Example: gen_numbers 1000 numbers.txt

mod common;

use clap::Parser;
use hashcube::app::number_gen::generate_numbers;
use hashcube::infra::number_io::{save_numbers_binary, save_numbers_text};
use std::path::PathBuf;
use std::time::Instant;

/// Fill a file with random 32-bit integers
#[derive(Parser, Debug)]
#[command(name = "gen_numbers", version, long_about = None)]
struct Cli {
    /// How many numbers to generate
    count: usize,

    /// Output file
    file: PathBuf,

    /// Seed for reproducible output
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Write little-endian 32-bit values instead of text lines
    #[arg(long = "binary")]
    binary: bool,
}

fn main() {
    let cli = Cli::parse();
    common::init_logging();

    let start = Instant::now();
    let numbers = generate_numbers(cli.count, cli.seed);

    let saved = if cli.binary {
        save_numbers_binary(&cli.file, &numbers)
    } else {
        save_numbers_text(&cli.file, &numbers)
    };

    if let Err(e) = saved {
        eprintln!(
            "A problem was encountered while writing {}: {}",
            cli.file.display(),
            e
        );
        std::process::exit(1);
    }

    println!(
        "Wrote {} numbers to {} in {:.2} ms.",
        numbers.len(),
        cli.file.display(),
        start.elapsed().as_secs_f64() * 1000.0
    );
}
