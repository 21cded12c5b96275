//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading and database
//! management.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tablebook::config::OutputFormat;
use tablebook::database::default_data_dir;
use tablebook::logging::LOG_MODE_ENV;
use tablebook::{init_logger, Config, ConfigBuilder, Database, DatabaseConfig, Logger};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the configured busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory: `--data-dir` if given, else `~/.tablebook`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(|_| {
            CliError::Config(
                "Could not determine data directory (home directory not found)".to_string(),
            )
        }),
    }
}

/// Load layered configuration for the resolved data directory.
///
/// Sources, highest priority first:
/// 1. Environment variables
/// 2. `<data_dir>/config.yaml`
/// 3. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Choose the logger for this invocation.
///
/// Flags and `TABLEBOOK_LOG_MODE` win; otherwise `log_mode` from the
/// configuration file applies. A configuration that cannot be loaded here
/// is ignored, since the command reports it when it loads the configuration.
pub fn build_logger(global: &GlobalOptions) -> Logger {
    if global.verbose || global.quiet || env::var(LOG_MODE_ENV).is_ok() {
        return init_logger(global.verbose, global.quiet);
    }

    resolve_data_dir(global)
        .ok()
        .and_then(|dir| {
            ConfigBuilder::new()
                .with_data_dir(&dir)
                .skip_env()
                .build()
                .ok()
        })
        .and_then(|config| config.log_level())
        .map_or_else(|| init_logger(false, false), Logger::new)
}

/// Open the reservation database.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is
/// disabled by flag or configuration.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_data_dir(global)?.join(config.database_file());

    if !db_path.exists() && (global.disable_autoinit || config.autoinit_disabled()) {
        return Err(CliError::NoDataDirectory);
    }

    let timeout_seconds = global
        .busy_timeout
        .map_or_else(|| config.lock_wait_seconds(), u64::from);
    log::debug!(
        "Opening {} with a {timeout_seconds}s busy timeout",
        db_path.display()
    );
    let db_config =
        DatabaseConfig::new(db_path).with_busy_timeout(Duration::from_secs(timeout_seconds));

    Database::open(db_config).map_err(CliError::from)
}

/// Resolve the output format: command flag, then configuration.
pub fn output_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.unwrap_or_else(|| config.output_format())
}
