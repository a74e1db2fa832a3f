//! Source of "today" for date validation.

use chrono::{Local, NaiveDate};

/// Supplies the current calendar date.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tablebook::{Clock, FixedClock};
///
/// let date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
/// assert_eq!(FixedClock(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
