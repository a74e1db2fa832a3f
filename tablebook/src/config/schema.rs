//! Configuration schema definitions.
//!
//! This module defines the configuration structure for tablebook: which
//! store backend to use, the worksheet name, the operating hours new
//! reservations must fall within, and the SQLite lock timeout.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::{parse_time, OperatingHours};
use crate::store::{StoreBackend, StoreSettings, DEFAULT_WORKSHEET};

/// Default busy timeout for the SQLite backend, in seconds.
pub const DEFAULT_BUSY_TIMEOUT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that configuration from several sources can
/// be merged; unset fields fall back to built-in defaults when the
/// configuration is turned into [`StoreSettings`] or [`OperatingHours`].
///
/// # Examples
///
/// ```
/// use tablebook::config::Config;
/// use tablebook::store::StoreBackend;
///
/// let config: Config = serde_yaml::from_str(
///     "store: csv\nworksheet: bookings\nopening_time: \"11:00\"\n",
/// ).unwrap();
/// assert_eq!(config.store, Some(StoreBackend::Csv));
/// assert_eq!(config.worksheet.as_deref(), Some("bookings"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Store backend.
    pub store: Option<StoreBackend>,

    /// Worksheet (table) name inside the store.
    pub worksheet: Option<String>,

    /// Earliest bookable time, `HH:MM`.
    pub opening_time: Option<String>,

    /// Latest bookable time, `HH:MM`.
    pub closing_time: Option<String>,

    /// Maximum time to wait for a locked SQLite database (seconds).
    pub busy_timeout_seconds: Option<u64>,

    /// Default output format for list and search commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns the operating hours, defaulting each unset end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a time does not parse or the hours
    /// close before they open.
    pub fn operating_hours(&self) -> Result<OperatingHours> {
        let defaults = OperatingHours::default();
        let open = Self::hour_field("opening_time", self.opening_time.as_deref())?
            .unwrap_or_else(|| defaults.open());
        let close = Self::hour_field("closing_time", self.closing_time.as_deref())?
            .unwrap_or_else(|| defaults.close());
        OperatingHours::new(open, close)
    }

    /// Returns store settings rooted at `data_dir`.
    #[must_use]
    pub fn store_settings(&self, data_dir: &Path) -> StoreSettings {
        StoreSettings {
            backend: self.store.unwrap_or_default(),
            data_dir: data_dir.to_path_buf(),
            worksheet: self
                .worksheet
                .as_deref()
                .map_or(DEFAULT_WORKSHEET, str::trim)
                .to_string(),
            busy_timeout: Duration::from_secs(
                self.busy_timeout_seconds
                    .unwrap_or(DEFAULT_BUSY_TIMEOUT_SECONDS),
            ),
        }
    }

    fn hour_field(field: &str, value: Option<&str>) -> Result<Option<chrono::NaiveTime>> {
        value
            .map(|text| {
                parse_time(text).map_err(|e| Error::Validation {
                    field: field.into(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }
}

/// Output format for list and search commands.
///
/// # Examples
///
/// ```
/// use tablebook::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
    /// Human-readable table format.
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
store: sqlite
worksheet: bookings
opening_time: "11:30"
closing_time: "23:00"
busy_timeout_seconds: 10
output_format: json
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.store, Some(StoreBackend::Sqlite));
        assert_eq!(config.busy_timeout_seconds, Some(10));
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = serde_yaml::from_str("spreadsheet: x\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let result: std::result::Result<Config, _> = serde_yaml::from_str("store: sheets\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_operating_hours_defaults() {
        let hours = Config::default().operating_hours().unwrap();
        assert_eq!(hours, OperatingHours::default());
    }

    #[test]
    fn test_operating_hours_partial_override() {
        let config = Config {
            closing_time: Some("20:30".into()),
            ..Default::default()
        };
        let hours = config.operating_hours().unwrap();
        assert_eq!(hours.open(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(hours.close(), NaiveTime::from_hms_opt(20, 30, 0).unwrap());
    }

    #[test]
    fn test_operating_hours_bad_time() {
        let config = Config {
            opening_time: Some("8am".into()),
            ..Default::default()
        };
        let err = config.operating_hours().unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "opening_time"));
    }

    #[test]
    fn test_store_settings_defaults() {
        let settings = Config::default().store_settings(Path::new("/data"));
        assert_eq!(settings.backend, StoreBackend::Sqlite);
        assert_eq!(settings.worksheet, DEFAULT_WORKSHEET);
        assert_eq!(
            settings.busy_timeout,
            Duration::from_secs(DEFAULT_BUSY_TIMEOUT_SECONDS)
        );
    }

    #[test]
    fn test_store_settings_overrides() {
        let config = Config {
            store: Some(StoreBackend::Csv),
            worksheet: Some("patio".into()),
            busy_timeout_seconds: Some(1),
            ..Default::default()
        };
        let settings = config.store_settings(Path::new("/data"));
        assert_eq!(settings.location(), Path::new("/data/patio.csv"));
        assert_eq!(settings.busy_timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_store_settings_trims_worksheet() {
        let config = Config {
            store: Some(StoreBackend::Csv),
            worksheet: Some(" bookings ".into()),
            ..Default::default()
        };
        let settings = config.store_settings(Path::new("/data"));
        assert_eq!(settings.worksheet, "bookings");
        assert_eq!(settings.location(), Path::new("/data/bookings.csv"));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Tsv.to_string(), "tsv");
    }
}
