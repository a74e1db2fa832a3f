//! CSV-file table store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::{overlay, trim_grid, CellRef, Grid, TableStore};

const BACKEND: &str = "csv";

/// A worksheet kept as a single CSV file.
///
/// A missing file reads as an empty table. Writes rewrite the whole file
/// through a temporary sibling that is renamed into place.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file is not touched until the first read or write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_grid(&self) -> Result<Grid> {
        let mut reader = match ::csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
        {
            Ok(reader) => reader,
            Err(e) if is_not_found(&e) => return Ok(Vec::new()),
            Err(e) => return Err(Error::store_unavailable(BACKEND, e)),
        };

        let mut grid = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| Error::store_unavailable(BACKEND, e))?;
            grid.push(record.iter().map(str::to_string).collect());
        }
        Ok(grid)
    }

    fn write_grid(&self, grid: &Grid) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::store_unavailable(BACKEND, e))?;
        }

        let tmp = self.path.with_extension("csv.tmp");
        {
            let mut writer = ::csv::WriterBuilder::new()
                .flexible(true)
                .from_path(&tmp)
                .map_err(|e| Error::store_unavailable(BACKEND, e))?;
            for row in grid {
                // Blank lines are skipped on read, so keep empty rows as one empty cell
                let result = if row.is_empty() {
                    writer.write_record([""])
                } else {
                    writer.write_record(row)
                };
                result.map_err(|e| Error::store_unavailable(BACKEND, e))?;
            }
            writer
                .flush()
                .map_err(|e| Error::store_unavailable(BACKEND, e))?;
        }
        fs::rename(&tmp, &self.path).map_err(|e| Error::store_unavailable(BACKEND, e))
    }
}

fn is_not_found(err: &::csv::Error) -> bool {
    matches!(err.kind(), ::csv::ErrorKind::Io(e) if e.kind() == io::ErrorKind::NotFound)
}

impl TableStore for CsvStore {
    fn read_all(&self) -> Result<Grid> {
        self.read_grid().map(trim_grid)
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::store_unavailable(BACKEND, e)),
        }
    }

    fn write_from(&mut self, origin: CellRef, grid: &Grid) -> Result<()> {
        let mut current = self.read_grid()?;
        overlay(&mut current, origin, grid);
        self.write_grid(&trim_grid(current))
    }
}
