//! Line-oriented datasets.
//!
//! A [`Dataset`] is the ordered list of records the engine searches. Each
//! line of the source becomes one record, addressed by its zero-based
//! position. Records are never modified after loading.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::{Result, SearchError};

/// An ordered, immutable collection of text records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<String>,
}

impl Dataset {
    /// Create a dataset from any sequence of records.
    pub fn from_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Dataset {
            records: records.into_iter().map(Into::into).collect(),
        }
    }

    /// Read one record per line from `reader`.
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped. Empty lines are kept
    /// so that positions match line numbers. Bytes that are not valid UTF-8
    /// are replaced with U+FFFD rather than rejecting the whole dataset.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut records = Vec::new();
        for line in reader.split(b'\n') {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            records.push(String::from_utf8_lossy(&line).into_owned());
        }
        Ok(Dataset { records })
    }

    /// Load a dataset from a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SearchError::not_found(path),
            _ => SearchError::Io(e),
        })?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        log::debug!(
            "loaded {} records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Get the record at `position`.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.records.get(position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in original order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(String::as_str)
    }

    /// Iterate over `(position, record)` pairs in original order.
    pub fn iter_positions(&self) -> impl Iterator<Item = (usize, &str)> {
        self.iter().enumerate()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.records
    }
}

impl<S: Into<String>> FromIterator<S> for Dataset {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Dataset::from_records(iter)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    #[test]
    fn test_from_reader_strips_terminators() {
        let input = "Ann Smith\r\nBob Jones\n\nCarol White";
        let dataset = Dataset::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset.get(0), Some("Ann Smith"));
        assert_eq!(dataset.get(1), Some("Bob Jones"));
        assert_eq!(dataset.get(2), Some(""));
        assert_eq!(dataset.get(3), Some("Carol White"));
        assert_eq!(dataset.get(4), None);
    }

    #[test]
    fn test_from_reader_invalid_utf8() {
        let input: &[u8] = b"Ann Smith\nJos\xe9 Garcia\r\nCarol White\n";
        let dataset = Dataset::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.get(0), Some("Ann Smith"));
        assert_eq!(dataset.get(1), Some("Jos\u{fffd} Garcia"));
        assert_eq!(dataset.get(2), Some("Carol White"));
    }

    #[test]
    fn test_empty_reader() {
        let dataset = Dataset::from_reader(Cursor::new("")).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first line").unwrap();
        writeln!(file, "second line").unwrap();

        let dataset = Dataset::open(file.path()).unwrap();
        let records: Vec<&str> = dataset.iter().collect();
        assert_eq!(records, vec!["first line", "second line"]);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dataset::open(dir.path().join("missing.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_iter_positions() {
        let dataset: Dataset = ["a", "b"].into_iter().collect();
        let pairs: Vec<(usize, &str)> = dataset.iter_positions().collect();
        assert_eq!(pairs, vec![(0, "a"), (1, "b")]);
    }
}
