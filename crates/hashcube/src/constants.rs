//! Default parameters shared by the utilities and the CLI front ends

// =============================================================================
// Delimited lines
// =============================================================================

/// Field delimiter used by `split_line`
pub const DEFAULT_FIELD_DELIMITER: char = ',';

/// Column positions used as (page, category, section) when indexing rows
pub const DEFAULT_KEY_COLUMNS: [usize; 3] = [0, 1, 2];

// =============================================================================
// FizzBuzz
// =============================================================================

/// First number of the sequence
pub const DEFAULT_FIZZBUZZ_START: i64 = 0;

/// Last number of the sequence (inclusive)
pub const DEFAULT_FIZZBUZZ_END: i64 = 100;

/// Multiple that produces "Fizz"
pub const DEFAULT_FIZZ_MULTIPLE: i64 = 3;

/// Multiple that produces "Buzz"
pub const DEFAULT_BUZZ_MULTIPLE: i64 = 5;

pub const DEFAULT_FIZZ_TEXT: &str = "Fizz";
pub const DEFAULT_BUZZ_TEXT: &str = "Buzz";

/// Separator between sequence items
pub const DEFAULT_FIZZBUZZ_DELIMITER: &str = "\n";

// =============================================================================
// Function tables
// =============================================================================

/// Start value of the sampled range
pub const DEFAULT_TABLE_INITIAL: f64 = 0.0;

/// Cells per output row
pub const DEFAULT_TABLE_COLUMNS: usize = 4;

/// Minimum rendered width of one cell
pub const TABLE_CELL_WIDTH: usize = 25;

// =============================================================================
// Number files
// =============================================================================

/// Byte size of one number in the binary number format
pub const NUMBER_ENTRY_SIZE: usize = 4;
