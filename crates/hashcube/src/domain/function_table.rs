//! Lookup table functions and rendering
//!
//! This module evaluates the supported table functions and renders sampled
//! values as a brace-delimited initializer block.

use crate::constants::TABLE_CELL_WIDTH;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Function table errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("unknown function '{0}' (expected sin, cos, tan, x2 or x3)")]
    UnknownFunction(String),
    #[error("unknown angle unit '{0}' (expected deg or rad)")]
    UnknownAngleUnit(String),
    #[error("the number of steps must be greater than zero")]
    ZeroSteps,
    #[error("the number of columns must be greater than zero")]
    ZeroColumns,
    #[error("the final value must be greater than zero, got {0}")]
    NonPositiveFinal(f64),
}

/// Function evaluated for each table sample
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFunction {
    Sin,
    Cos,
    Tan,
    /// x squared
    X2,
    /// x cubed
    X3,
}

/// Unit of the argument passed to trigonometric functions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl TableFunction {
    /// Evaluate the function at `x`
    ///
    /// `unit` only affects the trigonometric functions.
    pub fn evaluate(self, x: f64, unit: AngleUnit) -> f64 {
        let angle = || match unit {
            AngleUnit::Degrees => x.to_radians(),
            AngleUnit::Radians => x,
        };

        match self {
            Self::Sin => angle().sin(),
            Self::Cos => angle().cos(),
            Self::Tan => angle().tan(),
            Self::X2 => x.powi(2),
            Self::X3 => x.powi(3),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::X2 => "x2",
            Self::X3 => "x3",
        }
    }
}

impl fmt::Display for TableFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableFunction {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            "x2" => Ok(Self::X2),
            "x3" => Ok(Self::X3),
            other => Err(TableError::UnknownFunction(other.to_string())),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deg" | "degree" | "degrees" => Ok(Self::Degrees),
            "rad" | "radian" | "radians" => Ok(Self::Radians),
            other => Err(TableError::UnknownAngleUnit(other.to_string())),
        }
    }
}

/// Render values as a brace-delimited table
///
/// Each row holds `columns` cells and starts with a single space. A cell is
/// the value, the optional suffix, and a trailing comma unless it is the
/// last value, left-aligned to `TABLE_CELL_WIDTH`.
pub fn render_table(values: &[f64], columns: usize, suffix: &str) -> Result<String, TableError> {
    if columns == 0 {
        return Err(TableError::ZeroColumns);
    }

    let mut output = String::from("{\n");
    let last = values.len().saturating_sub(1);

    for (row_index, row) in values.chunks(columns).enumerate() {
        output.push(' ');
        for (offset, value) in row.iter().enumerate() {
            let separator = if row_index * columns + offset == last {
                ""
            } else {
                ","
            };
            let cell = format!("{value:?}{suffix}{separator}");
            output.push_str(&format!("{cell:<width$}", width = TABLE_CELL_WIDTH));
        }
        output.push('\n');
    }

    output.push('}');
    Ok(output)
}
