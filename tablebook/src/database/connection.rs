//! Opening the cell store.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::Result;

use super::config::DatabaseConfig;

/// An open SQLite cell store with its schema checked.
///
/// # Examples
///
/// ```no_run
/// use tablebook::database::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
/// println!("{}", db.path().display());
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    path: PathBuf,
}

impl Database {
    /// Opens the database described by `config`.
    ///
    /// The parent directory is created when `create_if_missing` is set. The
    /// connection runs in WAL mode with the configured busy timeout, and a
    /// fresh file gets the current schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or created, or if it
    /// holds an unsupported schema version.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.create_if_missing {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open_with_flags(&config.path, config.open_flags())?;
        conn.busy_timeout(config.busy_timeout)?;
        // journal_mode answers with the mode now in effect
        let mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        log::debug!(
            "opened cell store at {} (journal mode {mode})",
            config.path.display()
        );

        super::migrations::ensure_schema(&conn)?;
        Ok(Self {
            conn,
            path: config.path,
        })
    }

    /// Returns the database file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
