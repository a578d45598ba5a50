//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and data structures without I/O dependencies.

pub mod composite_index;
pub mod delimited;
pub mod fizzbuzz;
pub mod function_table;
