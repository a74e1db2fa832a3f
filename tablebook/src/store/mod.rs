//! External table store abstraction.
//!
//! Reservations live in a spreadsheet-like grid of strings. This module
//! defines the row-oriented contract the rest of the library relies on
//! ([`TableStore`]) together with the backends shipped with the crate:
//!
//! - [`MemoryStore`]: an in-process grid
//! - [`SqliteStore`]: a named worksheet in a SQLite cell store
//! - [`CsvStore`]: a worksheet kept as a CSV file
//!
//! The store is not transactional from the caller's point of view: a full
//! rewrite is a `clear` followed by a `write_from`, and nothing detects
//! edits made by another process in between. The last writer wins.

mod cell;
mod csv_file;
mod memory;
mod sqlite;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::{DatabaseConfig, DATABASE_FILE_NAME};
use crate::error::{Error, Result};

pub use self::cell::CellRef;
pub use self::csv_file::CsvStore;
pub use self::memory::MemoryStore;
pub use self::sqlite::SqliteStore;

/// A rectangular-ish grid of cell values, row by row.
///
/// Rows may have different lengths; missing trailing cells are empty.
pub type Grid = Vec<Vec<String>>;

/// Default worksheet name for reservations.
pub const DEFAULT_WORKSHEET: &str = "reservations";

/// Row-oriented access to an external table.
///
/// Implementations must behave like a spreadsheet range API: reads return
/// the used range starting at `A1`, `clear` empties the table, and
/// `write_from` overwrites the cells covered by the grid.
#[cfg_attr(test, mockall::automock)]
pub trait TableStore {
    /// Reads the full grid, header row included.
    ///
    /// Returns an empty grid if the table has never been written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreUnavailable`] if the backend cannot be read.
    fn read_all(&self) -> Result<Grid>;

    /// Removes all content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreUnavailable`] if the backend cannot be written.
    fn clear(&mut self) -> Result<()>;

    /// Writes `grid` with its top-left cell at `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreUnavailable`] if the backend cannot be written.
    fn write_from(&mut self, origin: CellRef, grid: &Grid) -> Result<()>;
}

impl<T: TableStore + ?Sized> TableStore for Box<T> {
    fn read_all(&self) -> Result<Grid> {
        (**self).read_all()
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn write_from(&mut self, origin: CellRef, grid: &Grid) -> Result<()> {
        (**self).write_from(origin, grid)
    }
}

/// Trims a grid the way spreadsheet APIs report their used range.
///
/// Trailing empty cells are removed from every row, then trailing empty
/// rows are dropped.
pub(crate) fn trim_grid(mut grid: Grid) -> Grid {
    for row in &mut grid {
        while row.last().is_some_and(String::is_empty) {
            row.pop();
        }
    }
    while grid.last().is_some_and(Vec::is_empty) {
        grid.pop();
    }
    grid
}

/// Copies `grid` into `target` with its top-left cell at `origin`,
/// growing `target` as needed.
pub(crate) fn overlay(target: &mut Grid, origin: CellRef, grid: &Grid) {
    for (dr, cells) in grid.iter().enumerate() {
        let r = origin.row() + dr;
        if target.len() <= r {
            target.resize_with(r + 1, Vec::new);
        }
        let row = &mut target[r];
        for (dc, value) in cells.iter().enumerate() {
            let c = origin.col() + dc;
            if row.len() <= c {
                row.resize(c + 1, String::new());
            }
            row[c].clone_from(value);
        }
    }
}

/// Available store backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// SQLite cell store in the data directory.
    #[default]
    Sqlite,
    /// One CSV file per worksheet in the data directory.
    Csv,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for StoreBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "csv" => Ok(Self::Csv),
            _ => Err(Error::Validation {
                field: "store".into(),
                message: format!("unknown store backend '{s}' (expected sqlite or csv)"),
            }),
        }
    }
}

/// Everything needed to open a store backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    /// Which backend to open.
    pub backend: StoreBackend,
    /// Directory holding the backend's files.
    pub data_dir: PathBuf,
    /// Worksheet (table) name inside the backend.
    pub worksheet: String,
    /// How long to wait for a locked SQLite database.
    pub busy_timeout: Duration,
}

impl StoreSettings {
    /// Creates settings for `backend` under `data_dir` with default
    /// worksheet and timeout.
    #[must_use]
    pub fn new(backend: StoreBackend, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            data_dir: data_dir.into(),
            worksheet: DEFAULT_WORKSHEET.to_string(),
            busy_timeout: Duration::from_secs(5),
        }
    }

    /// Returns the file the backend reads and writes.
    #[must_use]
    pub fn location(&self) -> PathBuf {
        match self.backend {
            StoreBackend::Sqlite => self.data_dir.join(DATABASE_FILE_NAME),
            StoreBackend::Csv => self.data_dir.join(format!("{}.csv", self.worksheet)),
        }
    }
}

/// Opens the backend described by `settings`.
///
/// # Errors
///
/// Returns [`Error::StoreUnavailable`] if the backend cannot be opened.
///
/// # Examples
///
/// ```no_run
/// use tablebook::store::{open_store, StoreBackend, StoreSettings, TableStore};
///
/// let settings = StoreSettings::new(StoreBackend::Csv, "/tmp/tablebook");
/// let store = open_store(&settings).unwrap();
/// let rows = store.read_all().unwrap();
/// ```
pub fn open_store(settings: &StoreSettings) -> Result<Box<dyn TableStore>> {
    log::info!(
        "opening {} store at {} (worksheet '{}')",
        settings.backend,
        settings.location().display(),
        settings.worksheet
    );
    match settings.backend {
        StoreBackend::Sqlite => {
            let config =
                DatabaseConfig::new(settings.location()).with_busy_timeout(settings.busy_timeout);
            Ok(Box::new(SqliteStore::open(config, &settings.worksheet)?))
        }
        StoreBackend::Csv => Ok(Box::new(CsvStore::new(settings.location()))),
    }
}
