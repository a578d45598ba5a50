//! hashcube - Triple-keyed multimap and small text utilities
//!
//! This crate provides:
//! - `CompositeIndex`, a multimap keyed by a (first, second, third) key triplet
//! - A quote-aware delimited line splitter
//! - FizzBuzz sequence and function lookup table generators
//! - Random number file helpers

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use app::csv_index::{CsvIndexError, KeyColumns, RowIndex, index_lines};
pub use app::table_builder::{TableOptions, build_table};
pub use domain::composite_index::{Chain, CompositeIndex};
#[cfg(feature = "fx-hash")]
pub use domain::composite_index::FxCompositeIndex;
pub use domain::delimited::{split_line, split_line_with};
pub use domain::fizzbuzz::FizzBuzzOptions;
pub use domain::function_table::{AngleUnit, TableError, TableFunction};
