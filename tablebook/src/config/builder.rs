//! Configuration builder.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from the file, environment and programmatic layers.
///
/// # Examples
///
/// ```
/// use tablebook::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         worksheet: Some("bookings".into()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.worksheet.as_deref(), Some("bookings"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `config.yaml` from `dir` instead of the resolved data directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Ignores configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores `TABLEBOOK_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies `config` on top of every other layer.
    ///
    /// Calling this more than once merges the overrides in call order.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        match self.overrides {
            Some(ref mut existing) => ConfigMerger::merge_into(existing, &config),
            None => self.overrides = Some(config),
        }
        self
    }

    /// Merges and validates the layers.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be resolved, the file
    /// cannot be read or parsed, an environment value is invalid, or the
    /// merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let data_dir = match self.data_dir {
                Some(dir) => dir,
                None => crate::database::resolve_data_dir()?,
            };
            if let Some(source) = ConfigLoader::load_user_config(&data_dir)? {
                config = ConfigMerger::merge(vec![source]);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::ENV_WORKSHEET;
    use crate::error::Error;
    use crate::store::StoreBackend;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_layer() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.yaml"), "store: csv\n").unwrap();

        let config = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.store, Some(StoreBackend::Csv));
    }

    #[test]
    #[serial]
    fn test_precedence_programmatic_over_env_over_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.yaml"),
            "worksheet: file\nbusy_timeout_seconds: 2\nstore: csv\n",
        )
        .unwrap();
        std::env::set_var(ENV_WORKSHEET, "env");

        let result = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .with_config(Config {
                busy_timeout_seconds: Some(7),
                ..Default::default()
            })
            .build();
        std::env::remove_var(ENV_WORKSHEET);

        let config = result.unwrap();
        assert_eq!(config.worksheet.as_deref(), Some("env"));
        assert_eq!(config.busy_timeout_seconds, Some(7));
        assert_eq!(config.store, Some(StoreBackend::Csv));
    }

    #[test]
    fn test_with_config_merges_repeated_calls() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                worksheet: Some("first".into()),
                ..Default::default()
            })
            .with_config(Config {
                store: Some(StoreBackend::Csv),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.worksheet.as_deref(), Some("first"));
        assert_eq!(config.store, Some(StoreBackend::Csv));
    }

    #[test]
    fn test_invalid_merged_config_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                busy_timeout_seconds: Some(0),
                ..Default::default()
            })
            .build();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_broken_file_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.yaml"), "unknown_key: 1\n").unwrap();

        let result = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .skip_env()
            .build();
        assert!(result.is_err());
    }
}
