//! Plain text file I/O

use crate::infra::ensure_parent_dir;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Write `text` to `path`, replacing any existing file
pub fn write_text(path: impl AsRef<Path>, text: &str) -> io::Result<()> {
    ensure_parent_dir(path.as_ref())?;
    fs::write(path, text)
}

/// Read all lines of a text file
///
/// Line terminators (`\n` or `\r\n`) are stripped.
pub fn read_lines(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    reader.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("fizz.txt");

        write_text(&path, "1\r\n2\nFizz").unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["1", "2", "Fizz"]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_lines(dir.path().join("absent.csv")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
