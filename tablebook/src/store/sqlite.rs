//! SQLite-backed table store.

use crate::database::{Database, DatabaseConfig};
use crate::error::{Error, Result};

use super::{trim_grid, CellRef, Grid, TableStore};

const BACKEND: &str = "sqlite";

/// One worksheet inside a SQLite cell store.
///
/// Several worksheets can share one database file; each store value only
/// sees and modifies its own.
///
/// # Examples
///
/// ```no_run
/// use tablebook::database::DatabaseConfig;
/// use tablebook::store::{SqliteStore, TableStore};
///
/// let store = SqliteStore::open(DatabaseConfig::new("/tmp/tablebook.db"), "reservations").unwrap();
/// let rows = store.read_all().unwrap();
/// ```
#[derive(Debug)]
pub struct SqliteStore {
    db: Database,
    worksheet: String,
}

impl SqliteStore {
    /// Opens (creating if allowed) the database and binds to `worksheet`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreUnavailable`] if the database cannot be opened
    /// or has an unsupported schema.
    pub fn open(config: DatabaseConfig, worksheet: impl Into<String>) -> Result<Self> {
        let db = Database::open(config).map_err(unavailable)?;
        Ok(Self::with_database(db, worksheet))
    }

    /// Binds an already-open database to `worksheet`.
    #[must_use]
    pub fn with_database(db: Database, worksheet: impl Into<String>) -> Self {
        Self {
            db,
            worksheet: worksheet.into(),
        }
    }

    /// Returns the worksheet name.
    #[must_use]
    pub fn worksheet(&self) -> &str {
        &self.worksheet
    }
}

fn unavailable(err: Error) -> Error {
    match err {
        Error::StoreUnavailable { .. } => err,
        other => Error::store_unavailable(BACKEND, other),
    }
}

impl TableStore for SqliteStore {
    fn read_all(&self) -> Result<Grid> {
        self.db
            .read_worksheet(&self.worksheet)
            .map(trim_grid)
            .map_err(unavailable)
    }

    fn clear(&mut self) -> Result<()> {
        let removed = self
            .db
            .clear_worksheet(&self.worksheet)
            .map_err(unavailable)?;
        log::debug!("cleared {removed} cell(s) from worksheet '{}'", self.worksheet);
        Ok(())
    }

    fn write_from(&mut self, origin: CellRef, grid: &Grid) -> Result<()> {
        self.db
            .write_cells(&self.worksheet, origin.row(), origin.col(), grid)
            .map_err(unavailable)
    }
}
