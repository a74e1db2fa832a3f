//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use tablebook::config::{Config, ConfigMerger};
///
/// let low = Config { worksheet: Some("low".to_string()), ..Default::default() };
/// let high = Config { worksheet: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.worksheet, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is a simple override: a `Some` in `source` replaces
    /// whatever `target` held. Opening and closing times are merged
    /// independently.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.store.is_some() {
            target.store = source.store;
        }

        if source.worksheet.is_some() {
            target.worksheet.clone_from(&source.worksheet);
        }

        if source.opening_time.is_some() {
            target.opening_time.clone_from(&source.opening_time);
        }

        if source.closing_time.is_some() {
            target.closing_time.clone_from(&source.closing_time);
        }

        if source.busy_timeout_seconds.is_some() {
            target.busy_timeout_seconds = source.busy_timeout_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
