//! CSV-backed row source.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::debug;

use rowbind_core::RowSource;
use rowbind_model::{BindError, Result};

/// Streams CSV records as binder rows.
///
/// The file's first record is delivered like any other row; the binder treats
/// it as the header. Ragged records pass through unchanged, and a UTF-8 BOM
/// on the very first cell is stripped so mapped labels still match.
#[derive(Debug)]
pub struct CsvRowSource<R: Read> {
    reader: Reader<R>,
    record: StringRecord,
    current: Vec<String>,
    first: bool,
}

impl CsvRowSource<File> {
    /// Open a CSV file as a row source.
    ///
    /// # Errors
    ///
    /// [`BindError::Source`] when the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening csv row source");
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(BindError::from_source)?;
        Ok(Self::wrap(reader))
    }
}

impl<R: Read> CsvRowSource<R> {
    /// Wrap any reader producing CSV text.
    pub fn from_reader(reader: R) -> Self {
        Self::wrap(
            ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(reader),
        )
    }

    fn wrap(reader: Reader<R>) -> Self {
        Self {
            reader,
            record: StringRecord::new(),
            current: Vec::new(),
            first: true,
        }
    }
}

impl<R: Read> RowSource for CsvRowSource<R> {
    fn advance(&mut self) -> Result<bool> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => {
                self.current.clear();
                self.current
                    .extend(self.record.iter().map(str::to_owned));
                if self.first {
                    self.first = false;
                    if let Some(cell) = self.current.first_mut()
                        && cell.starts_with('\u{feff}')
                    {
                        *cell = cell.trim_start_matches('\u{feff}').to_string();
                    }
                }
                Ok(true)
            }
            Ok(false) => Ok(false),
            Err(err) => Err(BindError::from_source(err)),
        }
    }

    fn cells(&self) -> Result<&[String]> {
        if self.first {
            return Err(BindError::from_source("no current row"));
        }
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(text: &str) -> CsvRowSource<&[u8]> {
        CsvRowSource::from_reader(text.as_bytes())
    }

    fn drain(mut rows: CsvRowSource<&[u8]>) -> Vec<Vec<String>> {
        let mut all = Vec::new();
        while rows.advance().unwrap() {
            all.push(rows.cells().unwrap().to_vec());
        }
        all
    }

    #[test]
    fn reads_records_in_order() {
        let rows = drain(source("Name,Age\nKaye Goff,26\nAdrienne Kirby,22\n"));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["Name", "Age"]);
        assert_eq!(rows[2], vec!["Adrienne Kirby", "22"]);
    }

    #[test]
    fn strips_a_leading_bom() {
        let rows = drain(source("\u{feff}Name,Age\nKaye Goff,26\n"));
        assert_eq!(rows[0][0], "Name");
    }

    #[test]
    fn ragged_records_pass_through() {
        let rows = drain(source("A,B\n1\n2,3,4\n"));
        assert_eq!(rows[1], vec!["1"]);
        assert_eq!(rows[2], vec!["2", "3", "4"]);
    }

    #[test]
    fn quoted_cells_keep_their_commas() {
        let rows = drain(source("Address\n\"867-988 Sed St., Apt 2\"\n"));
        assert_eq!(rows[1], vec!["867-988 Sed St., Apt 2"]);
    }

    #[test]
    fn cells_before_advance_is_an_error() {
        let rows = source("A\n1\n");
        assert!(rows.cells().is_err());
    }

    #[test]
    fn empty_input_is_exhausted_immediately() {
        let mut rows = source("");
        assert!(!rows.advance().unwrap());
    }
}
