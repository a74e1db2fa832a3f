//! Output formatting for reservation listings.
//!
//! This module renders the indexed listings returned by
//! [`ReservationService::view_reservations`](crate::ReservationService::view_reservations)
//! and [`search_reservations`](crate::ReservationService::search_reservations)
//! as an aligned text table, JSON, CSV or TSV.

mod formatters;

use crate::config::OutputFormat;
use crate::service::IndexedReservation;
use crate::Result;

pub use formatters::{DelimitedFormatter, JsonFormatter, TableFormatter, LISTING_COLUMNS};

/// Trait for formatting reservation listings into different output formats.
pub trait ReservationFormatter {
    /// Format the given listing into a string without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, listing: &[IndexedReservation]) -> Result<String>;
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::config::OutputFormat;
    ///
    /// let text = OutputFormat::Csv.formatter().format(&[]).unwrap();
    /// assert_eq!(text, "Index,Name,Date,Time,Number of Guests");
    /// ```
    #[must_use]
    pub fn formatter(self) -> Box<dyn ReservationFormatter> {
        match self {
            Self::Table => Box::new(TableFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Csv => Box::new(DelimitedFormatter::new(b',')),
            Self::Tsv => Box::new(DelimitedFormatter::new(b'\t')),
        }
    }
}
