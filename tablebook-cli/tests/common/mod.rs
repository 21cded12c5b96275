//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment variables the CLI reads, cleared for every test command.
const TABLEBOOK_VARS: &[&str] = &[
    "TABLEBOOK_DATA_DIR",
    "TABLEBOOK_BUSY_TIMEOUT",
    "TABLEBOOK_DISABLE_AUTOINIT",
    "TABLEBOOK_DATABASE_FILE",
    "TABLEBOOK_MAXIMUM_LOCK_WAIT_SECONDS",
    "TABLEBOOK_LOG_MODE",
    "TABLEBOOK_OUTPUT_FORMAT",
];

/// Test environment with isolated data directory.
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
    /// The data directory is not created; tablebook creates it on demand.
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

    /// Get a command builder without `--data-dir`.
    ///
    /// `HOME` points into the temporary directory so the default data
    /// directory is isolated as well.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("tablebook").expect("Failed to find tablebook binary");
        for var in TABLEBOOK_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.temp_path);
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

    /// Path of the default database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("tablebook.db")
    }

    /// Write `config.yaml` into the data directory.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.data_dir.join("config.yaml"), contents)
            .expect("Failed to write config");
    }

    /// Create a valid reservation and return its id.
    ///
    /// # Panics
    /// Panics if the command fails or doesn't print an id.
    pub fn create_simple(&self, name: &str) -> i64 {
        let output = self
            .command()
            .args(valid_reservation_args())
            .args(["--name", name])
            .output()
            .expect("Failed to run create command");

        assert!(
            output.status.success(),
            "Create failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .parse()
            .expect("Output is not a valid reservation id")
    }

    /// Count stored reservations.
    pub fn count_reservations(&self) -> i64 {
        let conn = rusqlite::Connection::open(self.database_path()).expect("Failed to open db");
        conn.query_row("SELECT COUNT(*) FROM reservations", [], |row| row.get(0))
            .expect("Failed to count reservations")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// `create` plus every required field except `--name`.
#[allow(dead_code)]
pub fn valid_reservation_args() -> Vec<&'static str> {
    vec![
        "create",
        "--date",
        "2017/06/10",
        "--time",
        "06:02 AM",
        "--party",
        "4",
        "--email",
        "usename@example.com",
    ]
}

/// Every field of a valid reservation, without a subcommand.
#[allow(dead_code)]
pub fn reservation_fields(email: &str) -> Vec<String> {
    [
        "--date",
        "2017/06/10",
        "--time",
        "06:02 AM",
        "--party",
        "4",
        "--name",
        "Family",
        "--email",
        email,
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}
