//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A reservation date far enough ahead to stay valid.
pub const FUTURE_DATE: &str = "01-01-2099";

/// A date that is always in the past.
pub const PAST_DATE: &str = "01-01-2000";

/// Environment variables that would leak host configuration into a test.
const ISOLATED_VARS: &[&str] = &[
    "TABLEBOOK_DATA_DIR",
    "TABLEBOOK_STORE",
    "TABLEBOOK_WORKSHEET",
    "TABLEBOOK_OPENING_TIME",
    "TABLEBOOK_CLOSING_TIME",
    "TABLEBOOK_BUSY_TIMEOUT_SECONDS",
    "TABLEBOOK_OUTPUT_FORMAT",
    "TABLEBOOK_LOG_MODE",
];

/// Test environment with an isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the tablebook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; tablebook creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("tablebook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a command builder with no data directory configured.
    ///
    /// Host `TABLEBOOK_*` variables are removed so only the test's own
    /// flags and variables apply.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("tablebook").expect("Failed to find tablebook binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Add a reservation, asserting success.
    pub fn add(&self, name: &str, date: &str, time: &str, guests: &str) {
        self.command()
            .args(["add", "--name", name, "--date", date, "--time", time])
            .args(["--guests", guests])
            .assert()
            .success();
    }

    /// Run `list --format json` and parse the result.
    pub fn list_json(&self) -> serde_json::Value {
        let output = self
            .command()
            .args(["list", "--format", "json"])
            .output()
            .expect("Failed to run list");
        assert!(output.status.success(), "list failed: {output:?}");
        serde_json::from_slice(&output.stdout).expect("list output is not JSON")
    }

    /// Names from `list --format json`, in listing order.
    pub fn listed_names(&self) -> Vec<String> {
        self.list_json()
            .as_array()
            .expect("listing is an array")
            .iter()
            .map(|entry| entry["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}
