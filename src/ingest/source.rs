use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::{JobDocsError, Result};
use crate::models::record::{Columns, SourceRecord};

/// Sequential reader over a headered CSV source.
///
/// Fields have no size cap and rows may be shorter or longer than the
/// header; missing cells simply read as absent.
pub struct CsvSource<R> {
    path: PathBuf,
    reader: csv::Reader<R>,
    columns: Columns,
}

impl CsvSource<File> {
    /// Open a CSV file and read its header row.
    pub fn open(path: &Path) -> Result<Self> {
        let reader = builder()
            .from_path(path)
            .map_err(|e| JobDocsError::from_csv(path, e))?;
        Self::with_reader(path, reader)
    }
}

impl<R: Read> CsvSource<R> {
    /// Wrap any reader; `label` is used in error messages only.
    pub fn from_reader(label: impl Into<PathBuf>, rdr: R) -> Result<Self> {
        Self::with_reader(label, builder().from_reader(rdr))
    }

    fn with_reader(label: impl Into<PathBuf>, mut reader: csv::Reader<R>) -> Result<Self> {
        let path = label.into();
        let headers = reader
            .headers()
            .map_err(|e| JobDocsError::from_csv(&path, e))?;
        let columns = Columns::from_headers(headers);
        Ok(Self {
            path,
            reader,
            columns,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Visit every data row in order. Stops at the first parse error or the
    /// first error returned by `visit`. Returns the number of rows visited.
    pub fn for_each_record<F>(&mut self, mut visit: F) -> Result<usize>
    where
        F: FnMut(SourceRecord<'_>) -> Result<()>,
    {
        let Self {
            path,
            reader,
            columns,
        } = self;

        let mut rows = 0;
        for result in reader.records() {
            let values = result.map_err(|e| JobDocsError::from_csv(path.as_path(), e))?;
            visit(SourceRecord::new(rows, columns, values))?;
            rows += 1;
        }
        Ok(rows)
    }
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}
