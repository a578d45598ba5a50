//! Delimited row indexing workflow
//!
//! Splits text lines into fields and files each row under the
//! (page, category, section) triplet taken from three of its columns.

use crate::constants::{DEFAULT_FIELD_DELIMITER, DEFAULT_KEY_COLUMNS};
#[cfg(not(feature = "fx-hash"))]
use crate::domain::composite_index::CompositeIndex;
#[cfg(feature = "fx-hash")]
use crate::domain::composite_index::FxCompositeIndex;
use crate::domain::delimited::{DelimitedError, split_line_with};
use thiserror::Error;

/// Rows keyed by three of their own columns
#[cfg(feature = "fx-hash")]
pub type RowIndex = FxCompositeIndex<String, String, String, Vec<String>>;

/// Rows keyed by three of their own columns
#[cfg(not(feature = "fx-hash"))]
pub type RowIndex = CompositeIndex<String, String, String, Vec<String>>;

/// Row indexing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvIndexError {
    /// A row does not have the requested key column
    #[error("line {line}: key column {column} is missing (row has {fields} fields)")]
    MissingColumn {
        /// 1-based line number
        line: usize,
        column: usize,
        fields: usize,
    },
    #[error(transparent)]
    Delimited(#[from] DelimitedError),
}

/// Column positions and delimiter used to build a `RowIndex`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyColumns {
    /// Positions of the first, second and third key
    pub positions: [usize; 3],
    pub delimiter: char,
}

impl Default for KeyColumns {
    fn default() -> Self {
        Self {
            positions: DEFAULT_KEY_COLUMNS,
            delimiter: DEFAULT_FIELD_DELIMITER,
        }
    }
}

impl KeyColumns {
    pub fn with_positions(mut self, first: usize, second: usize, third: usize) -> Self {
        self.positions = [first, second, third];
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn key_of(&self, row: &[String], line: usize) -> Result<[String; 3], CsvIndexError> {
        let field = |column: usize| {
            row.get(column)
                .cloned()
                .ok_or(CsvIndexError::MissingColumn {
                    line,
                    column,
                    fields: row.len(),
                })
        };

        let [first, second, third] = self.positions;
        Ok([field(first)?, field(second)?, field(third)?])
    }
}

/// Build a row index from text lines
///
/// Blank lines are skipped. Later rows sharing a triplet come first in
/// that triplet's chain.
pub fn index_lines<I, L>(lines: I, columns: KeyColumns) -> Result<RowIndex, CsvIndexError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut index = RowIndex::default();
    index_lines_into(&mut index, lines, columns)?;
    Ok(index)
}

/// Add rows from text lines to an existing index
///
/// Returns the number of rows added. On error, rows from earlier lines stay
/// in the index.
pub fn index_lines_into<I, L>(
    index: &mut RowIndex,
    lines: I,
    columns: KeyColumns,
) -> Result<usize, CsvIndexError>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut added = 0;

    for (offset, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        let line_number = offset + 1;
        let row = split_line_with(line, columns.delimiter)?;
        let [first, second, third] = columns.key_of(&row, line_number)?;
        tracing::trace!(line = line_number, %first, %second, %third, "indexing row");

        index.put(first, second, third, row);
        added += 1;
    }

    tracing::debug!(rows = added, triplets = index.triplet_count(), "indexed rows");
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
1,intro,overview,Welcome
1,intro,overview,\"Hello, reader\"
2,setup,install,Run the installer

2,setup,config,Edit settings";

    #[test]
    fn test_index_by_default_columns() {
        let index = index_lines(SAMPLE.lines(), KeyColumns::default()).unwrap();

        assert_eq!(index.triplet_count(), 3);
        assert_eq!(index.value_count(), 4);

        let chain = index.chain_at("1", "intro", "overview").unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.front().unwrap()[3], "Hello, reader");
    }

    #[test]
    fn test_custom_positions_and_delimiter() {
        let lines = ["a;b;c;d", "a;x;c;d"];
        let columns = KeyColumns::default()
            .with_positions(3, 2, 0)
            .with_delimiter(';');
        let index = index_lines(lines, columns).unwrap();

        let mut seconds: Vec<_> = index.second_axis_keys("d").unwrap().cloned().collect();
        seconds.sort();
        assert_eq!(seconds, vec!["c"]);
        assert_eq!(index.chain_at("d", "c", "a").unwrap().len(), 2);
    }

    #[test]
    fn test_short_row_reports_line() {
        let lines = ["1,a,b", "", "2,only"];
        let err = index_lines(lines, KeyColumns::default()).unwrap_err();

        assert_eq!(
            err,
            CsvIndexError::MissingColumn {
                line: 3,
                column: 2,
                fields: 2
            }
        );
    }

    #[test]
    fn test_quote_delimiter_is_rejected() {
        let columns = KeyColumns::default().with_delimiter('"');
        assert_eq!(
            index_lines(["a"], columns).unwrap_err(),
            CsvIndexError::Delimited(DelimitedError::QuoteDelimiter)
        );
    }

    #[cfg(feature = "fx-hash")]
    #[test]
    fn test_row_index_uses_fx_hasher() {
        let index: FxCompositeIndex<String, String, String, Vec<String>> =
            index_lines(["a,b,c"], KeyColumns::default()).unwrap();
        assert_eq!(index.triplet_count(), 1);
    }

    #[test]
    fn test_index_lines_into_appends() {
        let mut index = RowIndex::default();
        let added = index_lines_into(&mut index, ["p,c,s,1"], KeyColumns::default()).unwrap();
        assert_eq!(added, 1);
        index_lines_into(&mut index, ["p,c,s,2"], KeyColumns::default()).unwrap();

        let rows: Vec<&str> = index
            .chain_at("p", "c", "s")
            .unwrap()
            .iter()
            .map(|row| row[3].as_str())
            .collect();
        assert_eq!(rows, vec!["2", "1"]);
    }
}
