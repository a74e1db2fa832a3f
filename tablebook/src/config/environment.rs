//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `TABLEBOOK_*` environment variables
//! that override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Selects the store backend (`sqlite` or `csv`).
pub const ENV_STORE: &str = "TABLEBOOK_STORE";
/// Selects the worksheet name.
pub const ENV_WORKSHEET: &str = "TABLEBOOK_WORKSHEET";
/// Overrides the opening time.
pub const ENV_OPENING_TIME: &str = "TABLEBOOK_OPENING_TIME";
/// Overrides the closing time.
pub const ENV_CLOSING_TIME: &str = "TABLEBOOK_CLOSING_TIME";
/// Overrides the SQLite busy timeout in seconds.
pub const ENV_BUSY_TIMEOUT_SECONDS: &str = "TABLEBOOK_BUSY_TIMEOUT_SECONDS";
/// Overrides the default output format.
pub const ENV_OUTPUT_FORMAT: &str = "TABLEBOOK_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use tablebook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., unknown backend, non-numeric timeout).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(store) = Self::var(ENV_STORE) {
            config.store = Some(store.parse().map_err(|_| Error::Validation {
                field: ENV_STORE.into(),
                message: format!("Unknown store backend '{store}' (expected sqlite or csv)"),
            })?);
        }

        if let Some(worksheet) = Self::var(ENV_WORKSHEET) {
            config.worksheet = Some(worksheet);
        }

        if let Some(open) = Self::var(ENV_OPENING_TIME) {
            config.opening_time = Some(open);
        }

        if let Some(close) = Self::var(ENV_CLOSING_TIME) {
            config.closing_time = Some(close);
        }

        if let Some(seconds) = Self::var(ENV_BUSY_TIMEOUT_SECONDS) {
            config.busy_timeout_seconds = Some(seconds.parse().map_err(|_| Error::Validation {
                field: ENV_BUSY_TIMEOUT_SECONDS.into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Some(format) = Self::var(ENV_OUTPUT_FORMAT) {
            config.output_format = Some(Self::parse_output_format(&format)?);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.trim().is_empty())
    }

    /// Parse an output format name (case-insensitive).
    fn parse_output_format(s: &str) -> Result<OutputFormat> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "table" => Ok(OutputFormat::Table),
            _ => Err(Error::Validation {
                field: ENV_OUTPUT_FORMAT.into(),
                message: format!("Invalid output format: '{s}' (expected json/csv/tsv/table)"),
            }),
        }
    }
}
