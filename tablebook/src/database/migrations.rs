//! Schema versioning for the cell store.
//!
//! The layout has a single version. A fresh file is initialized; a file
//! written by any other version is refused rather than migrated.

use rusqlite::{Connection, OptionalExtension};

use crate::error::{Error, Result};

use super::schema::{
    CREATE_CELLS_TABLE, CREATE_METADATA_TABLE, CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION,
    SELECT_SCHEMA_VERSION,
};

const METADATA_EXISTS: &str =
    "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'metadata'";

/// Creates the tables and records [`CURRENT_SCHEMA_VERSION`].
///
/// # Errors
///
/// Returns an error if any statement fails.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(&format!("{CREATE_METADATA_TABLE};{CREATE_CELLS_TABLE};"))?;
    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION.to_string()])?;
    Ok(())
}

/// Reads the recorded schema version; `None` for a database that has never
/// been initialized.
///
/// # Errors
///
/// Returns an error if the query fails or the stored version is not a
/// number.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use tablebook::database::migrations::{initialize_schema, schema_version};
///
/// let conn = Connection::open_in_memory().unwrap();
/// assert_eq!(schema_version(&conn).unwrap(), None);
/// initialize_schema(&conn).unwrap();
/// assert_eq!(schema_version(&conn).unwrap(), Some(1));
/// ```
pub fn schema_version(conn: &Connection) -> Result<Option<u32>> {
    let has_metadata = conn
        .query_row(METADATA_EXISTS, [], |_| Ok(()))
        .optional()?
        .is_some();
    if !has_metadata {
        return Ok(None);
    }

    let stored: Option<String> = conn
        .query_row(SELECT_SCHEMA_VERSION, [], |row| row.get(0))
        .optional()?;
    stored
        .map(|value| {
            value.trim().parse::<u32>().map_err(|_| Error::Validation {
                field: "schema_version".into(),
                message: format!("stored schema version '{value}' is not a number"),
            })
        })
        .transpose()
}

/// Initializes a fresh database and checks the version of an existing one.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] when the stored version is
/// not [`CURRENT_SCHEMA_VERSION`].
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    match schema_version(conn)? {
        None => {
            log::debug!("initializing fresh cell store schema");
            initialize_schema(conn)
        }
        Some(CURRENT_SCHEMA_VERSION) => Ok(()),
        Some(found) => Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found,
        }),
    }
}
