//! Delimited file index CLI
//!
//! Usage: csv_index <file> [--keys a,b,c] [--delimiter C] [--query K1 K2 K3]
//! Example: csv_index entries.csv --query 3 faq billing

mod common;

use clap::Parser;
use hashcube::constants::{DEFAULT_FIELD_DELIMITER, DEFAULT_KEY_COLUMNS};
use hashcube::infra::text_io::read_lines;
use hashcube::{KeyColumns, RowIndex, index_lines};
use std::path::PathBuf;

/// Index the rows of a delimited file by three of their columns
#[derive(Parser, Debug)]
#[command(name = "csv_index", version, long_about = None)]
struct Cli {
    /// Delimited input file
    file: PathBuf,

    /// Column positions of the first, second and third key
    #[arg(long = "keys", value_delimiter = ',', default_values_t = DEFAULT_KEY_COLUMNS)]
    keys: Vec<usize>,

    /// Field delimiter
    #[arg(short = 'd', long = "delimiter", default_value_t = DEFAULT_FIELD_DELIMITER)]
    delimiter: char,

    /// Print the rows stored under this key triplet, newest first
    #[arg(short = 'q', long = "query", num_args = 3, value_names = ["FIRST", "SECOND", "THIRD"])]
    query: Option<Vec<String>>,
}

impl Cli {
    fn key_columns(&self) -> Result<KeyColumns, String> {
        let &[first, second, third] = self.keys.as_slice() else {
            return Err(format!(
                "--keys expects exactly 3 column positions, got {}",
                self.keys.len()
            ));
        };
        Ok(KeyColumns::default()
            .with_positions(first, second, third)
            .with_delimiter(self.delimiter))
    }
}

fn sorted<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<&'a String> {
    let mut keys: Vec<&String> = keys.collect();
    keys.sort();
    keys
}

fn print_summary(index: &RowIndex) {
    println!(
        "{} rows in {} chains.",
        index.value_count(),
        index.triplet_count()
    );

    for first in sorted(index.first_axis_keys()) {
        println!("{}", first);
        for second in sorted(index.second_axis_keys(first.as_str()).into_iter().flatten()) {
            println!("  {}", second);
            let thirds = index.third_axis_keys(first.as_str(), second.as_str());
            for third in sorted(thirds.into_iter().flatten()) {
                let rows = index
                    .chain_at(first.as_str(), second.as_str(), third.as_str())
                    .map_or(0, |chain| chain.len());
                println!("    {} ({} rows)", third, rows);
            }
        }
    }
}

fn print_query(index: &RowIndex, query: &[String], delimiter: char) -> bool {
    let [first, second, third] = query else {
        return false;
    };

    match index.chain_at(first.as_str(), second.as_str(), third.as_str()) {
        Some(chain) => {
            let separator = delimiter.to_string();
            for row in chain {
                println!("{}", row.join(separator.as_str()));
            }
            true
        }
        None => {
            eprintln!("No rows under ({}, {}, {}).", first, second, third);
            false
        }
    }
}

fn main() {
    let cli = Cli::parse();
    common::init_logging();

    let lines = match read_lines(&cli.file) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.file.display(), e);
            std::process::exit(1);
        }
    };

    let columns = match cli.key_columns() {
        Ok(columns) => columns,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let index = match index_lines(&lines, columns) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.query {
        Some(query) => {
            if !print_query(&index, query, cli.delimiter) {
                std::process::exit(1);
            }
        }
        None => print_summary(&index),
    }
}
