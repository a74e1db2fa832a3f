//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, opening the
//! reservation service, and printing listings.

use crate::error::CliError;
use clap::ValueEnum;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tablebook::config::OutputFormat;
use tablebook::store::{open_store, StoreBackend, TableStore};
use tablebook::{Config, ConfigBuilder, IndexedReservation, ReservationService};

/// The service type every command works with.
pub type Service = ReservationService<Box<dyn TableStore>>;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the store backend.
    pub store: Option<StoreArg>,

    /// Override the worksheet name.
    pub worksheet: Option<String>,

    /// Override the SQLite busy timeout (in seconds).
    pub busy_timeout: Option<u64>,
}

/// Store backend choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StoreArg {
    /// SQLite cell store (`tablebook.db`)
    Sqlite,
    /// One CSV file per worksheet
    Csv,
}

impl From<StoreArg> for StoreBackend {
    fn from(arg: StoreArg) -> Self {
        match arg {
            StoreArg::Sqlite => StoreBackend::Sqlite,
            StoreArg::Csv => StoreBackend::Csv,
        }
    }
}

/// Output format choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Aligned table (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Tsv => OutputFormat::Tsv,
        }
    }
}

/// Resolve the data directory.
///
/// Priority: `--data-dir` / `TABLEBOOK_DATA_DIR` (both arrive through clap),
/// then `~/.tablebook`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => tablebook::database::default_data_dir()
            .map_err(|e| CliError::NoDataDirectory(e.to_string())),
    }
}

/// Resolve the data directory and make sure it exists.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the path exists but is not a directory.
pub fn ensure_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    let data_dir = resolve_data_dir(global)?;
    if data_dir.exists() && !data_dir.is_dir() {
        return Err(CliError::NoDataDirectory(format!(
            "{} is not a directory",
            data_dir.display()
        )));
    }
    fs::create_dir_all(&data_dir)?;
    Ok(data_dir)
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;
    let overrides = Config {
        store: global.store.map(StoreBackend::from),
        worksheet: global.worksheet.clone(),
        busy_timeout_seconds: global.busy_timeout,
        ..Default::default()
    };

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the configured store and load the reservation service.
pub fn open_service(global: &GlobalOptions, config: &Config) -> Result<Service, CliError> {
    let data_dir = ensure_data_dir(global)?;
    let hours = config
        .operating_hours()
        .map_err(|e| CliError::Config(e.to_string()))?;
    let settings = config.store_settings(&data_dir);
    log::info!(
        "Using {} store at {}",
        settings.backend,
        shorten_path(&settings.location())
    );
    let store = open_store(&settings)?;
    Ok(ReservationService::open(store)?.with_hours(hours))
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

/// Pick the listing format: command-line flag, then config, then table.
pub fn effective_format(flag: Option<FormatArg>, config: &Config) -> OutputFormat {
    flag.map(OutputFormat::from)
        .or(config.output_format)
        .unwrap_or(OutputFormat::Table)
}

/// Print a listing to stdout in `format`.
pub fn print_listing(listing: &[IndexedReservation], format: OutputFormat) -> Result<(), CliError> {
    let text = format.formatter().format(listing)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{text}")?;
    Ok(())
}
