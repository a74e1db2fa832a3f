//! Integration tests for configuration driving the store and service.
//!
//! Tests that modify environment variables are marked with `#[serial]`.

mod common;

use std::fs;

use common::{open_service, EnvGuard};
use serial_test::serial;
use tablebook::config::{ConfigBuilder, CONFIG_FILE_NAME};
use tablebook::database::resolve_data_dir;
use tablebook::store::StoreBackend;
use tablebook::{Error, FieldError};
use tempfile::TempDir;

#[test]
#[serial]
fn test_file_selects_backend_and_hours() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "store: csv\nworksheet: lunch\nopening_time: \"11:00\"\nclosing_time: \"15:00\"\n",
    )
    .unwrap();

    let config = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .skip_env()
        .build()
        .unwrap();
    let settings = config.store_settings(dir.path());
    assert_eq!(settings.backend, StoreBackend::Csv);
    assert_eq!(settings.location(), dir.path().join("lunch.csv"));

    let mut service = open_service(&settings).with_hours(config.operating_hours().unwrap());
    let err = service
        .add_reservation("Alice", "20-06-2030", "19:00", "2")
        .unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidTime(FieldError::OutsideHours { .. })
    ));

    service
        .add_reservation("Alice", "20-06-2030", "15:00", "2")
        .unwrap();
    assert!(dir.path().join("lunch.csv").exists());
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "store: csv\n").unwrap();
    let _store = EnvGuard::set("TABLEBOOK_STORE", "sqlite");

    let config = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .build()
        .unwrap();
    assert_eq!(
        config.store_settings(dir.path()).backend,
        StoreBackend::Sqlite
    );
}

#[test]
#[serial]
fn test_data_dir_env_is_used_for_config_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "worksheet: terrace\n").unwrap();
    let _data_dir = EnvGuard::set("TABLEBOOK_DATA_DIR", dir.path().to_str().unwrap());

    assert_eq!(resolve_data_dir().unwrap(), dir.path());
    let config = ConfigBuilder::new().skip_env().build().unwrap();
    assert_eq!(config.worksheet.as_deref(), Some("terrace"));
}

#[test]
#[serial]
fn test_invalid_file_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "opening_time: \"22:00\"\nclosing_time: \"08:00\"\n",
    )
    .unwrap();

    let result = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .skip_env()
        .build();
    assert!(matches!(result, Err(Error::Validation { .. })));
}
