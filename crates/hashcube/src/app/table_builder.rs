//! Function table workflow
//!
//! This module samples a table function over a range and renders the result.

use crate::constants::{DEFAULT_TABLE_COLUMNS, DEFAULT_TABLE_INITIAL};
use crate::domain::function_table::{AngleUnit, TableError, TableFunction, render_table};
use rayon::prelude::*;

/// Options for function table generation
#[derive(Clone, Debug, PartialEq)]
pub struct TableOptions {
    pub function: TableFunction,
    pub angle_unit: AngleUnit,
    /// Number of steps between initial and final value (steps + 1 samples)
    pub steps: u32,
    pub initial: f64,
    pub final_value: f64,
    /// Cells per output row
    pub columns: usize,
    /// Append `f` to every value
    pub float_suffix: bool,
}

impl TableOptions {
    /// Create options with default initial value, unit and layout
    pub fn new(function: TableFunction, steps: u32, final_value: f64) -> Self {
        Self {
            function,
            angle_unit: AngleUnit::default(),
            steps,
            initial: DEFAULT_TABLE_INITIAL,
            final_value,
            columns: DEFAULT_TABLE_COLUMNS,
            float_suffix: false,
        }
    }

    pub fn with_angle_unit(mut self, unit: AngleUnit) -> Self {
        self.angle_unit = unit;
        self
    }

    pub fn with_initial(mut self, initial: f64) -> Self {
        self.initial = initial;
        self
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_float_suffix(mut self, enabled: bool) -> Self {
        self.float_suffix = enabled;
        self
    }

    /// Check the options before generation
    pub fn validate(&self) -> Result<(), TableError> {
        if self.steps == 0 {
            return Err(TableError::ZeroSteps);
        }
        if self.columns == 0 {
            return Err(TableError::ZeroColumns);
        }
        if self.final_value.is_nan() || self.final_value <= 0.0 {
            return Err(TableError::NonPositiveFinal(self.final_value));
        }
        Ok(())
    }

    /// Argument of the sample at `step`
    pub fn sample_point(&self, step: u32) -> f64 {
        self.initial + f64::from(step) * (self.final_value - self.initial) / f64::from(self.steps)
    }
}

/// Evaluate every sample of the table
///
/// Samples are computed in parallel and returned in step order.
pub fn sample_table(options: &TableOptions) -> Result<Vec<f64>, TableError> {
    options.validate()?;

    let values: Vec<f64> = (0..=options.steps)
        .into_par_iter()
        .map(|step| {
            options
                .function
                .evaluate(options.sample_point(step), options.angle_unit)
        })
        .collect();

    tracing::debug!(
        function = %options.function,
        samples = values.len(),
        "sampled function table"
    );

    Ok(values)
}

/// Sample and render a function table
pub fn build_table(options: &TableOptions) -> Result<String, TableError> {
    let values = sample_table(options)?;
    let suffix = if options.float_suffix { "f" } else { "" };
    render_table(&values, options.columns, suffix)
}
