//! Delimited line splitting
//!
//! Splits a single text line into fields. Double quotes group text so the
//! delimiter can appear inside a field; a doubled quote inside a quoted
//! section stands for one literal quote.

use crate::constants::DEFAULT_FIELD_DELIMITER;
use thiserror::Error;

const QUOTE: char = '"';

/// Delimited splitting errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelimitedError {
    /// The quote character cannot act as the field delimiter
    #[error("the quote character cannot be used as a field delimiter")]
    QuoteDelimiter,
}

/// Split a line on the default `,` delimiter
pub fn split_line(line: &str) -> Vec<String> {
    split_fields(line, DEFAULT_FIELD_DELIMITER)
}

/// Split a line on a custom delimiter
///
/// The final field is always emitted, so a line with `n` unquoted delimiters
/// yields `n + 1` fields and an empty line yields a single empty field.
/// An unterminated quote keeps the rest of the line in the current field.
pub fn split_line_with(line: &str, delimiter: char) -> Result<Vec<String>, DelimitedError> {
    if delimiter == QUOTE {
        return Err(DelimitedError::QuoteDelimiter);
    }
    Ok(split_fields(line, delimiter))
}

fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            QUOTE if quoted => {
                if chars.peek() == Some(&QUOTE) {
                    chars.next();
                    field.push(QUOTE);
                } else {
                    quoted = false;
                }
            }
            QUOTE => quoted = true,
            c if c == delimiter && !quoted => fields.push(std::mem::take(&mut field)),
            c => field.push(c),
        }
    }

    fields.push(field);
    fields
}
