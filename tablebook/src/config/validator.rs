//! Configuration validation.
//!
//! This module checks that configuration values are usable before they are
//! turned into store settings and operating hours.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Longest worksheet name accepted.
const MAX_WORKSHEET_LEN: usize = 100;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use tablebook::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref worksheet) = config.worksheet {
            Self::validate_worksheet(worksheet)?;
        }

        // Parses both times and checks their order
        config.operating_hours()?;

        if let Some(timeout) = config.busy_timeout_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "busy_timeout_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }

    /// Validate a worksheet name.
    ///
    /// The name doubles as a file stem for the CSV backend, so it must be
    /// non-empty, free of path separators and null bytes, and reasonably short.
    fn validate_worksheet(value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: "worksheet".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains(['/', '\\', '\0']) {
            return Err(Error::Validation {
                field: "worksheet".into(),
                message: "Cannot contain path separators or null bytes".into(),
            });
        }

        if trimmed == "." || trimmed == ".." {
            return Err(Error::Validation {
                field: "worksheet".into(),
                message: "Cannot be '.' or '..'".into(),
            });
        }

        if trimmed.len() > MAX_WORKSHEET_LEN {
            return Err(Error::Validation {
                field: "worksheet".into(),
                message: format!("Cannot exceed {MAX_WORKSHEET_LEN} characters"),
            });
        }

        Ok(())
    }
}
