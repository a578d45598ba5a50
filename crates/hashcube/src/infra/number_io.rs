//! Number file I/O operations
//!
//! Numbers are stored either as text (one decimal value per line) or as a
//! little-endian `i32` stream.

use crate::constants::NUMBER_ENTRY_SIZE;
use crate::infra::ensure_parent_dir;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Number file errors
#[derive(Debug, Error)]
pub enum NumberIoError {
    /// Binary file length is not a whole number of entries
    #[error("invalid file size: {0} bytes is not a whole number of 4-byte entries")]
    InvalidFileSize(u64),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Save numbers as text, one per line
pub fn save_numbers_text(path: impl AsRef<Path>, numbers: &[i32]) -> Result<(), NumberIoError> {
    ensure_parent_dir(path.as_ref())?;
    let mut writer = BufWriter::new(File::create(path)?);

    for number in numbers {
        writeln!(writer, "{}", number)?;
    }

    writer.flush()?;
    Ok(())
}

/// Save numbers as little-endian `i32` values
pub fn save_numbers_binary(path: impl AsRef<Path>, numbers: &[i32]) -> Result<(), NumberIoError> {
    ensure_parent_dir(path.as_ref())?;
    let mut writer = BufWriter::new(File::create(path)?);

    for &number in numbers {
        writer.write_i32::<LittleEndian>(number)?;
    }

    writer.flush()?;
    Ok(())
}

/// Load numbers written by `save_numbers_binary`
pub fn load_numbers_binary(path: impl AsRef<Path>) -> Result<Vec<i32>, NumberIoError> {
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    if len % NUMBER_ENTRY_SIZE as u64 != 0 {
        return Err(NumberIoError::InvalidFileSize(len));
    }

    let count = (len / NUMBER_ENTRY_SIZE as u64) as usize;
    let mut reader = BufReader::new(file);
    let mut numbers = Vec::with_capacity(count);
    for _ in 0..count {
        numbers.push(reader.read_i32::<LittleEndian>()?);
    }

    Ok(numbers)
}
