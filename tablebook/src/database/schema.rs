//! Database schema definitions and SQL constants.
//!
//! This module contains the SQL table definitions, indices, and statements
//! used to persist worksheets as individual cells.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the cells table.
///
/// Every non-empty cell of every worksheet is one row. Row and column are
/// zero-based offsets from the top-left corner of the worksheet. The primary
/// key doubles as the index used to read a worksheet in row order.
pub const CREATE_CELLS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS cells (
        worksheet TEXT NOT NULL,
        row_idx INTEGER NOT NULL,
        col_idx INTEGER NOT NULL,
        value TEXT NOT NULL,
        PRIMARY KEY (worksheet, row_idx, col_idx)
    )";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to list every cell of a worksheet.
pub const SELECT_WORKSHEET_CELLS: &str = r"
    SELECT row_idx, col_idx, value
    FROM cells
    WHERE worksheet = ?
    ORDER BY row_idx, col_idx
";

/// SQL statement to write a single cell, replacing any previous value.
pub const UPSERT_CELL: &str = r"
    INSERT OR REPLACE INTO cells (worksheet, row_idx, col_idx, value)
    VALUES (?, ?, ?, ?)
";

/// SQL statement to blank a single cell.
pub const DELETE_CELL: &str = r"
    DELETE FROM cells
    WHERE worksheet = ? AND row_idx = ? AND col_idx = ?
";

/// SQL statement to remove every cell of a worksheet.
pub const DELETE_WORKSHEET: &str = "DELETE FROM cells WHERE worksheet = ?";
