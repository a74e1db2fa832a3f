//! Cell store location and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::OpenFlags;

use crate::config::DEFAULT_BUSY_TIMEOUT_SECONDS;
use crate::error::{Error, Result};

/// File name of the SQLite cell store inside the data directory.
pub const DATABASE_FILE_NAME: &str = "tablebook.db";

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "TABLEBOOK_DATA_DIR";

/// Where the cell store lives and how to connect to it.
///
/// # Examples
///
/// ```
/// use tablebook::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/srv/tablebook/tablebook.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert!(config.create_if_missing);
/// assert_eq!(config.busy_timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// How long a connection waits on a locked database before failing.
    pub busy_timeout: Duration,
    /// Create the file (and its parent directory) when it is absent.
    pub create_if_missing: bool,
}

impl DatabaseConfig {
    /// Configuration for `path` that creates the file on first use and waits
    /// [`DEFAULT_BUSY_TIMEOUT_SECONDS`] on a locked database.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_secs(DEFAULT_BUSY_TIMEOUT_SECONDS),
            create_if_missing: true,
        }
    }

    /// Sets the busy timeout.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Refuses to open a database file that does not exist yet.
    #[must_use]
    pub fn must_exist(mut self) -> Self {
        self.create_if_missing = false;
        self
    }

    pub(super) fn open_flags(&self) -> OpenFlags {
        let base = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if self.create_if_missing {
            base | OpenFlags::SQLITE_OPEN_CREATE
        } else {
            base
        }
    }
}

/// Returns the default data directory (`~/.tablebook`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".tablebook"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "cannot determine home directory".into(),
        })
}

/// Resolves the data directory: `$TABLEBOOK_DATA_DIR` when set and
/// non-empty, else [`default_data_dir`].
///
/// # Errors
///
/// Returns an error if the variable is unset and the home directory cannot
/// be determined.
pub fn resolve_data_dir() -> Result<PathBuf> {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}
