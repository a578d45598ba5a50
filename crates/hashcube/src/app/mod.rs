//! Application layer - Use case implementations
//!
//! This module coordinates domain and infrastructure layers to implement use cases.

pub mod csv_index;
pub mod number_gen;
pub mod table_builder;
