//! Reservation record model.
//!
//! This module defines the shape of a single reservation together with the
//! parse, validate and format rules applied at the store boundary. Dates and
//! times are held as typed `chrono` values; the fixed `DD-MM-YYYY` and `HH:MM`
//! text forms only appear when reading user input or talking to the store.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Text format of a stored or entered date (`DD-MM-YYYY`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Text format of a stored or entered time (`HH:MM`, 24-hour).
pub const TIME_FORMAT: &str = "%H:%M";

/// A reservation field, used to label parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The guest name.
    Name,
    /// The reservation date.
    Date,
    /// The reservation time.
    Time,
    /// The party size.
    GuestCount,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Date => write!(f, "date"),
            Self::Time => write!(f, "time"),
            Self::GuestCount => write!(f, "number of guests"),
        }
    }
}

/// Why a single field value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The text could not be parsed at all.
    #[error("'{input}' is not a valid {field} (expected {expected})")]
    Parse {
        /// The field being parsed.
        field: Field,
        /// The rejected text.
        input: String,
        /// A human description of the accepted form.
        expected: &'static str,
    },

    /// The date lies strictly before today.
    #[error("reservation date {} cannot be in the past (today is {})", date.format(DATE_FORMAT), today.format(DATE_FORMAT))]
    PastDate {
        /// The rejected date.
        date: NaiveDate,
        /// The date validation ran against.
        today: NaiveDate,
    },

    /// The time lies outside the operating hours.
    #[error("{} is outside operating hours {} to {}", time.format(TIME_FORMAT), open.format(TIME_FORMAT), close.format(TIME_FORMAT))]
    OutsideHours {
        /// The rejected time.
        time: NaiveTime,
        /// Opening time (inclusive).
        open: NaiveTime,
        /// Closing time (inclusive).
        close: NaiveTime,
    },

    /// The guest count parsed but was zero or negative.
    #[error("number of guests must be positive, got {value}")]
    NonPositiveGuestCount {
        /// The rejected count.
        value: i64,
    },
}

/// The daily window in which new reservations may start.
///
/// Both ends are inclusive. The default window is 08:00 to 22:00.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use tablebook::OperatingHours;
///
/// let hours = OperatingHours::default();
/// assert!(hours.contains(NaiveTime::from_hms_opt(8, 0, 0).unwrap()));
/// assert!(hours.contains(NaiveTime::from_hms_opt(22, 0, 0).unwrap()));
/// assert!(!hours.contains(NaiveTime::from_hms_opt(22, 1, 0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingHours {
    open: NaiveTime,
    close: NaiveTime,
}

impl OperatingHours {
    /// Creates an operating-hours window.
    ///
    /// # Errors
    ///
    /// Returns an error if `open` is later than `close`.
    pub fn new(open: NaiveTime, close: NaiveTime) -> crate::Result<Self> {
        if open > close {
            return Err(crate::Error::Validation {
                field: "operating_hours".into(),
                message: format!(
                    "opening time {} is after closing time {}",
                    open.format(TIME_FORMAT),
                    close.format(TIME_FORMAT)
                ),
            });
        }
        Ok(Self { open, close })
    }

    /// Returns the opening time.
    #[must_use]
    pub const fn open(&self) -> NaiveTime {
        self.open
    }

    /// Returns the closing time.
    #[must_use]
    pub const fn close(&self) -> NaiveTime {
        self.close
    }

    /// Returns true if `time` falls inside the window.
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.open && time <= self.close
    }
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self {
            open: NaiveTime::MIN + chrono::Duration::hours(8),
            close: NaiveTime::MIN + chrono::Duration::hours(22),
        }
    }
}

/// Parses a `DD-MM-YYYY` date.
///
/// # Errors
///
/// Returns [`FieldError::Parse`] if the text is not a valid date.
///
/// # Examples
///
/// ```
/// use tablebook::record::{format_date, parse_date};
///
/// let date = parse_date("24-12-2030").unwrap();
/// assert_eq!(format_date(Some(date)), "24-12-2030");
/// assert!(parse_date("2030-12-24").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| FieldError::Parse {
        field: Field::Date,
        input: text.to_string(),
        expected: "DD-MM-YYYY",
    })
}

/// Rejects dates strictly before `today`.
///
/// # Errors
///
/// Returns [`FieldError::PastDate`] for any date earlier than `today`.
pub fn validate_new_date(date: NaiveDate, today: NaiveDate) -> Result<(), FieldError> {
    if date < today {
        return Err(FieldError::PastDate { date, today });
    }
    Ok(())
}

/// Parses an `HH:MM` 24-hour time.
///
/// # Errors
///
/// Returns [`FieldError::Parse`] if the text is not a valid time.
pub fn parse_time(text: &str) -> Result<NaiveTime, FieldError> {
    NaiveTime::parse_from_str(text.trim(), TIME_FORMAT).map_err(|_| FieldError::Parse {
        field: Field::Time,
        input: text.to_string(),
        expected: "HH:MM",
    })
}

/// Rejects times outside the operating hours.
///
/// # Errors
///
/// Returns [`FieldError::OutsideHours`] if `time` is before opening or after
/// closing.
pub fn validate_new_time(time: NaiveTime, hours: &OperatingHours) -> Result<(), FieldError> {
    if !hours.contains(time) {
        return Err(FieldError::OutsideHours {
            time,
            open: hours.open(),
            close: hours.close(),
        });
    }
    Ok(())
}

/// Parses and validates a guest count.
///
/// Surrounding whitespace is ignored. Text that is not an integer fails with
/// [`FieldError::Parse`]; zero or negative values fail with
/// [`FieldError::NonPositiveGuestCount`].
///
/// # Errors
///
/// Returns a [`FieldError`] describing the rejection.
///
/// # Examples
///
/// ```
/// use tablebook::record::parse_guest_count;
///
/// assert_eq!(parse_guest_count("4").unwrap(), 4);
/// assert!(parse_guest_count("0").is_err());
/// assert!(parse_guest_count("four").is_err());
/// ```
pub fn parse_guest_count(text: &str) -> Result<u32, FieldError> {
    let parse_error = || FieldError::Parse {
        field: Field::GuestCount,
        input: text.to_string(),
        expected: "a whole number",
    };

    let value: i64 = text.trim().parse().map_err(|_| parse_error())?;
    validate_guest_count(value)?;
    u32::try_from(value).map_err(|_| parse_error())
}

/// Rejects zero or negative guest counts.
///
/// # Errors
///
/// Returns [`FieldError::NonPositiveGuestCount`] when `value <= 0`.
pub fn validate_guest_count(value: i64) -> Result<(), FieldError> {
    if value <= 0 {
        return Err(FieldError::NonPositiveGuestCount { value });
    }
    Ok(())
}

/// Formats a date as `DD-MM-YYYY`, or an empty string for a missing date.
#[must_use]
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Formats a time as `HH:MM`, or an empty string for a missing time.
#[must_use]
pub fn format_time(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

/// Formats a guest count, or an empty string for a missing count.
#[must_use]
pub fn format_guest_count(count: Option<u32>) -> String {
    count.map(|c| c.to_string()).unwrap_or_default()
}

/// One reservation as held in memory.
///
/// Fields loaded from the store may be missing when the stored cell could
/// not be parsed; such records are kept and written back with empty cells.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use tablebook::ReservationRecord;
///
/// let record = ReservationRecord::new(
///     "Alice",
///     NaiveDate::from_ymd_opt(2030, 5, 1),
///     NaiveTime::from_hms_opt(19, 30, 0),
///     Some(2),
/// );
/// assert!(record.name_matches("ALICE"));
/// assert_eq!(record.guest_count(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRecord {
    name: String,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    guest_count: Option<u32>,
    extra: BTreeMap<String, String>,
}

impl ReservationRecord {
    /// Creates a record from already-typed values.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
        guest_count: Option<u32>,
    ) -> Self {
        Self {
            name: name.into(),
            date,
            time,
            guest_count,
            extra: BTreeMap::new(),
        }
    }

    /// Attaches cells from non-reservation columns of the store.
    #[must_use]
    pub(crate) fn with_extra(mut self, extra: BTreeMap<String, String>) -> Self {
        self.extra = extra;
        self
    }

    /// Returns the guest name as entered.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the reservation date, if it parsed.
    #[must_use]
    pub const fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Returns the reservation time, if it parsed.
    #[must_use]
    pub const fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    /// Returns the party size, if it parsed.
    #[must_use]
    pub const fn guest_count(&self) -> Option<u32> {
        self.guest_count
    }

    /// Returns the value of a non-reservation column carried from the store.
    #[must_use]
    pub fn extra(&self, column: &str) -> Option<&str> {
        self.extra.get(column).map(String::as_str)
    }

    /// Case-insensitive equality on the name, ignoring surrounding
    /// whitespace on either side.
    #[must_use]
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Case-insensitive substring match on the name.
    #[must_use]
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name
            .to_lowercase()
            .contains(&fragment.to_lowercase())
    }
}

/// A fully typed reservation ready to be added.
///
/// The service re-checks every field when adding, so a draft built by hand
/// is held to the same rules as one built from text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    /// The guest name.
    pub name: String,
    /// The reservation date.
    pub date: NaiveDate,
    /// The reservation time.
    pub time: NaiveTime,
    /// The party size.
    pub guest_count: u32,
}

impl From<NewReservation> for ReservationRecord {
    fn from(draft: NewReservation) -> Self {
        Self::new(
            draft.name,
            Some(draft.date),
            Some(draft.time),
            Some(draft.guest_count),
        )
    }
}

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(parse_date("01-02-2031").unwrap(), date(2031, 2, 1));
        assert_eq!(parse_date(" 15-08-2030 ").unwrap(), date(2030, 8, 15));
    }

    #[test]
    fn test_parse_date_rejects_other_layouts() {
        for bad in ["2031-02-01", "31/12/2030", "32-01-2030", "29-02-2031", "", "tomorrow"] {
            let err = parse_date(bad).unwrap_err();
            assert!(
                matches!(err, FieldError::Parse { field: Field::Date, .. }),
                "{bad} should be a parse error"
            );
        }
    }

    #[test]
    fn test_validate_new_date() {
        let today = date(2030, 6, 15);
        assert!(validate_new_date(today, today).is_ok());
        assert!(validate_new_date(date(2030, 6, 16), today).is_ok());

        let err = validate_new_date(date(2030, 6, 14), today).unwrap_err();
        assert_eq!(
            err,
            FieldError::PastDate {
                date: date(2030, 6, 14),
                today
            }
        );
        assert!(err.to_string().contains("14-06-2030"));
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("08:00").unwrap(), time(8, 0));
        assert_eq!(parse_time("21:45").unwrap(), time(21, 45));
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("12:60").is_err());
        assert!(parse_time("noon").is_err());
        assert!(parse_time("12:00:30").is_err());
    }

    #[test]
    fn test_operating_hours_boundaries() {
        let hours = OperatingHours::default();
        assert!(validate_new_time(time(8, 0), &hours).is_ok());
        assert!(validate_new_time(time(22, 0), &hours).is_ok());
        assert!(matches!(
            validate_new_time(time(7, 59), &hours),
            Err(FieldError::OutsideHours { .. })
        ));
        assert!(matches!(
            validate_new_time(time(22, 1), &hours),
            Err(FieldError::OutsideHours { .. })
        ));
    }

    #[test]
    fn test_operating_hours_rejects_inverted_window() {
        assert!(OperatingHours::new(time(23, 0), time(9, 0)).is_err());
        let hours = OperatingHours::new(time(11, 0), time(15, 0)).unwrap();
        assert!(!hours.contains(time(10, 59)));
        assert!(hours.contains(time(15, 0)));
    }

    #[test]
    fn test_parse_guest_count() {
        assert_eq!(parse_guest_count("1").unwrap(), 1);
        assert_eq!(parse_guest_count(" 12 ").unwrap(), 12);
        assert_eq!(
            parse_guest_count("0").unwrap_err(),
            FieldError::NonPositiveGuestCount { value: 0 }
        );
        assert_eq!(
            parse_guest_count("-3").unwrap_err(),
            FieldError::NonPositiveGuestCount { value: -3 }
        );
        assert!(matches!(
            parse_guest_count("2.5"),
            Err(FieldError::Parse { field: Field::GuestCount, .. })
        ));
        assert!(matches!(
            parse_guest_count("99999999999"),
            Err(FieldError::Parse { .. })
        ));
    }

    #[test]
    fn test_format_missing_values_as_empty() {
        assert_eq!(format_date(None), "");
        assert_eq!(format_time(None), "");
        assert_eq!(format_guest_count(None), "");
        assert_eq!(format_time(Some(time(9, 5))), "09:05");
    }

    #[test]
    fn test_name_matching() {
        let record = ReservationRecord::new("Natalia", None, None, Some(3));
        assert!(record.name_matches("natalia"));
        assert!(!record.name_matches("nat"));
        assert!(ReservationRecord::new(" Natalia ", None, None, None).name_matches("natalia"));
        assert!(record.name_contains("ALI"));
        assert!(!record.name_contains("xyz"));
    }

    #[test]
    fn test_new_reservation_into_record() {
        let draft = NewReservation {
            name: "Alice".into(),
            date: date(2030, 1, 1),
            time: time(12, 0),
            guest_count: 2,
        };
        let record = ReservationRecord::from(draft);
        assert_eq!(record.name(), "Alice");
        assert_eq!(record.date(), Some(date(2030, 1, 1)));
        assert_eq!(record.time(), Some(time(12, 0)));
        assert_eq!(record.guest_count(), Some(2));
        assert_eq!(record.extra("Notes"), None);
    }
}
