//! Stderr logging for the `log` facade.
//!
//! The library only ever calls `log::{error, warn, info, debug}!`. A binary
//! that wants to see those records builds a [`Logger`] with [`init_logger`]
//! and calls [`Logger::install`] once at startup.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "TABLEBOOK_LOG_MODE";

/// How much diagnostic output reaches stderr.
///
/// # Examples
///
/// ```
/// use tablebook::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing at all.
    Quiet,
    /// Errors and warnings.
    #[default]
    Normal,
    /// Everything down to debug records, tagged with their module.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        })
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(Error::Validation {
                field: LOG_MODE_ENV.into(),
                message: format!("unknown log mode '{s}' (expected quiet, normal or verbose)"),
            }),
        }
    }
}

impl LogLevel {
    /// The most detailed `log` facade level shown at this verbosity.
    #[must_use]
    pub const fn max_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

/// Writes `log` records to stderr.
///
/// # Examples
///
/// ```
/// use tablebook::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert_eq!(logger.level(), LogLevel::Normal);
/// ```
#[derive(Debug, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Makes this the process-wide `log` backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a logger was already installed.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level.max_level_filter();
        log::set_logger(Box::leak(Box::new(self)))?;
        log::set_max_level(filter);
        Ok(())
    }

    /// The stderr line for one record.
    fn render(&self, record: &log::Record<'_>) -> String {
        if self.level == LogLevel::Verbose {
            format!(
                "{} {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        } else {
            format!("{}: {}", record.level(), record.args())
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.max_level_filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", self.render(record));
        }
    }

    fn flush(&self) {}
}

/// Picks the logger for a process.
///
/// `verbose` wins over `quiet`; without either flag, `TABLEBOOK_LOG_MODE`
/// is used when it holds a known mode, else [`LogLevel::Normal`].
///
/// # Examples
///
/// ```
/// use tablebook::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = match (verbose, quiet) {
        (true, _) => LogLevel::Verbose,
        (false, true) => LogLevel::Quiet,
        (false, false) => env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| mode.parse().ok())
            .unwrap_or_default(),
    };
    Logger::new(level)
}
