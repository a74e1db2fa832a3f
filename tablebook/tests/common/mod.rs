//! Common test utilities for integration tests.
//!
//! This module provides helpers for opening services over real on-disk
//! store backends with a fixed clock.

use std::path::Path;

use chrono::NaiveDate;
use tablebook::store::{open_store, StoreBackend, StoreSettings, TableStore};
use tablebook::{FixedClock, ReservationService};

/// The date every test treats as "today".
#[allow(dead_code)]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()
}

/// Store settings for `backend` rooted at `dir`.
#[allow(dead_code)]
pub fn settings(backend: StoreBackend, dir: &Path) -> StoreSettings {
    StoreSettings::new(backend, dir)
}

/// Opens a service over the store described by `settings`.
#[allow(dead_code)]
pub fn open_service(settings: &StoreSettings) -> ReservationService<Box<dyn TableStore>> {
    let store = open_store(settings).unwrap();
    ReservationService::open(store)
        .unwrap()
        .with_clock(FixedClock(today()))
}

/// Both on-disk backends, for tests that must behave the same on each.
#[allow(dead_code)]
pub const BACKENDS: [StoreBackend; 2] = [StoreBackend::Sqlite, StoreBackend::Csv];

/// RAII guard for setting and restoring environment variables.
///
/// Tests using it must be `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `key` to `value` until the guard is dropped.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = std::env::var(key).ok();
        std::env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => std::env::set_var(&self.key, value),
            None => std::env::remove_var(&self.key),
        }
    }
}
