//! FizzBuzz sequence generation
//!
//! Numbers that are multiples of the fizz or buzz value are replaced by the
//! corresponding words; multiples of both get both words, fizz first.

use crate::constants::{
    DEFAULT_BUZZ_MULTIPLE, DEFAULT_BUZZ_TEXT, DEFAULT_FIZZ_MULTIPLE, DEFAULT_FIZZ_TEXT,
    DEFAULT_FIZZBUZZ_DELIMITER, DEFAULT_FIZZBUZZ_END, DEFAULT_FIZZBUZZ_START,
};
use thiserror::Error;

/// FizzBuzz generation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FizzBuzzError {
    /// Start is greater than end
    #[error("the start number {start} cannot be greater than the end number {end}")]
    InvalidRange { start: i64, end: i64 },
    /// A multiple of zero would divide by zero
    #[error("fizz and buzz multiples must be non-zero")]
    ZeroMultiple,
}

/// Options for FizzBuzz generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FizzBuzzOptions {
    pub fizz_multiple: i64,
    pub buzz_multiple: i64,
    /// First number (inclusive)
    pub start: i64,
    /// Last number (inclusive)
    pub end: i64,
    /// Separator placed between items (not after the last one)
    pub delimiter: String,
    pub fizz_text: String,
    pub buzz_text: String,
}

impl Default for FizzBuzzOptions {
    fn default() -> Self {
        Self {
            fizz_multiple: DEFAULT_FIZZ_MULTIPLE,
            buzz_multiple: DEFAULT_BUZZ_MULTIPLE,
            start: DEFAULT_FIZZBUZZ_START,
            end: DEFAULT_FIZZBUZZ_END,
            delimiter: DEFAULT_FIZZBUZZ_DELIMITER.to_string(),
            fizz_text: DEFAULT_FIZZ_TEXT.to_string(),
            buzz_text: DEFAULT_BUZZ_TEXT.to_string(),
        }
    }
}

impl FizzBuzzOptions {
    /// Set the inclusive number range
    pub fn with_range(mut self, start: i64, end: i64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_multiples(mut self, fizz: i64, buzz: i64) -> Self {
        self.fizz_multiple = fizz;
        self.buzz_multiple = buzz;
        self
    }

    pub fn with_words(mut self, fizz: impl Into<String>, buzz: impl Into<String>) -> Self {
        self.fizz_text = fizz.into();
        self.buzz_text = buzz.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Check the options before generation
    pub fn validate(&self) -> Result<(), FizzBuzzError> {
        if self.fizz_multiple == 0 || self.buzz_multiple == 0 {
            return Err(FizzBuzzError::ZeroMultiple);
        }
        if self.start > self.end {
            return Err(FizzBuzzError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Render a single number
///
/// Zero is always printed as a number.
pub fn fizzbuzz_item(n: i64, options: &FizzBuzzOptions) -> String {
    // i64::MIN % -1 overflows with `%`
    let fizz = n.wrapping_rem(options.fizz_multiple) == 0;
    let buzz = n.wrapping_rem(options.buzz_multiple) == 0;

    if n == 0 || !(fizz || buzz) {
        return n.to_string();
    }

    let mut item = String::new();
    if fizz {
        item.push_str(&options.fizz_text);
    }
    if buzz {
        item.push_str(&options.buzz_text);
    }
    item
}

/// Generate the whole sequence as one string
pub fn generate(options: &FizzBuzzOptions) -> Result<String, FizzBuzzError> {
    options.validate()?;

    let mut output = String::new();
    for n in options.start..=options.end {
        if n != options.start {
            output.push_str(&options.delimiter);
        }
        output.push_str(&fizzbuzz_item(n, options));
    }

    Ok(output)
}
