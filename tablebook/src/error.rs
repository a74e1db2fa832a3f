//! Error types for the tablebook library.
//!
//! This module provides the error hierarchy for every operation in the
//! library, using `thiserror` for ergonomic error handling. Field-level
//! validation failures are described by [`FieldError`](crate::record::FieldError)
//! and wrapped here according to the field they belong to.

use thiserror::Error;

use crate::record::FieldError;

/// Result type alias for operations that may fail with a tablebook error.
///
/// # Examples
///
/// ```
/// use tablebook::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tablebook library.
#[derive(Debug, Error)]
pub enum Error {
    /// The reservation name is unusable (for example, blank).
    #[error("invalid name '{name}': {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// The reason the name was rejected.
        reason: String,
    },

    /// A reservation with the same name (case-insensitive) already exists.
    #[error("a reservation for '{name}' already exists")]
    DuplicateName {
        /// The name that collided with an existing reservation.
        name: String,
    },

    /// The reservation date was malformed or in the past.
    #[error("invalid date: {0}")]
    InvalidDate(#[source] FieldError),

    /// The reservation time was malformed or outside operating hours.
    #[error("invalid time: {0}")]
    InvalidTime(#[source] FieldError),

    /// The guest count was malformed or not positive.
    #[error("invalid number of guests: {0}")]
    InvalidGuestCount(#[source] FieldError),

    /// The collection holds no reservations at all.
    #[error("no reservations found")]
    NoReservations,

    /// A search or delete found nothing for the given query.
    #[error("no reservations found matching '{query}'")]
    NoMatch {
        /// The query or name that matched nothing.
        query: String,
    },

    /// The external table store could not be read or written.
    #[error("table store '{backend}' unavailable: {source}")]
    StoreUnavailable {
        /// Name of the store backend that failed.
        backend: &'static str,
        /// The underlying failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An A1-style cell reference could not be parsed.
    #[error("invalid cell reference '{input}'")]
    InvalidCellRef {
        /// The rejected reference text.
        input: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred outside reservation fields.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An unsupported store schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

impl Error {
    /// Wraps a backend failure as [`Error::StoreUnavailable`].
    pub fn store_unavailable(
        backend: &'static str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::StoreUnavailable {
            backend,
            source: source.into(),
        }
    }

    /// Check if error is a rejected user input (name, date, time or guests).
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::Error;
    ///
    /// let err = Error::DuplicateName { name: "Alice".into() };
    /// assert!(err.is_invalid_input());
    /// assert!(!Error::NoReservations.is_invalid_input());
    /// ```
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidName { .. }
                | Self::DuplicateName { .. }
                | Self::InvalidDate(_)
                | Self::InvalidTime(_)
                | Self::InvalidGuestCount(_)
        )
    }

    /// Check if error means nothing was found (empty list or no match).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoReservations | Self::NoMatch { .. })
    }

    /// Check if error came from talking to the table store.
    #[must_use]
    pub fn is_store_unavailable(&self) -> bool {
        matches!(
            self,
            Self::StoreUnavailable { .. } | Self::Database(_) | Self::UnsupportedSchemaVersion { .. }
        )
    }
}
