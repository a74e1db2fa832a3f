//! Database layer backing the SQLite table store.
//!
//! This module provides a SQLite-based cell store: connection management,
//! schema versioning, and worksheet read/clear/write operations used by
//! [`SqliteStore`](crate::store::SqliteStore).
//!
//! # Examples
//!
//! ```no_run
//! use tablebook::database::{Database, DatabaseConfig};
//!
//! let config = DatabaseConfig::new("/tmp/tablebook.db");
//! let mut db = Database::open(config).unwrap();
//!
//! let grid = vec![vec!["Name".to_string(), "Date".to_string()]];
//! db.write_cells("reservations", 0, 0, &grid).unwrap();
//! assert_eq!(db.read_worksheet("reservations").unwrap(), grid);
//! ```

mod cells;
mod config;
mod connection;
pub mod migrations;
mod schema;
#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{
    default_data_dir, resolve_data_dir, DatabaseConfig, DATABASE_FILE_NAME, DATA_DIR_ENV,
};
pub use connection::Database;

pub use migrations::{ensure_schema, initialize_schema, schema_version};
