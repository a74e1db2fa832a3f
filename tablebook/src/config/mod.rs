//! Configuration system for tablebook.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file in the data directory
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`TABLEBOOK_*`)
//! 3. User config (`~/.tablebook/config.yaml`, or `config.yaml` in the data directory)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific data directory:
//!
//! ```no_run
//! use tablebook::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir(Path::new("/var/lib/tablebook"))
//!     .build()
//!     .unwrap();
//! let settings = config.store_settings(Path::new("/var/lib/tablebook"));
//! println!("using {} store", settings.backend);
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use tablebook::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         opening_time: Some("11:00".to_string()),
//!         closing_time: Some("15:00".to_string()),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let hours = config.operating_hours().unwrap();
//! assert_eq!(hours.open().to_string(), "11:00:00");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, DEFAULT_BUSY_TIMEOUT_SECONDS};
pub use validator::ConfigValidator;
