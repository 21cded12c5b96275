//! Configuration schema definitions.
//!
//! This module defines the configuration structure for tablebook: where the
//! database lives, how long to wait on locks, and how output is rendered.

use serde::{Deserialize, Serialize};

use crate::database::DATABASE_FILE;
use crate::logging::LogLevel;

/// Lock wait used when no source sets `maximum_lock_wait_seconds`.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so partial sources can be layered on top of
/// each other.
///
/// # Examples
///
/// ```
/// use tablebook::config::{Config, OutputFormat};
///
/// let config = Config {
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.database_file(), "tablebook.db");
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database file name inside the data directory.
    pub database_file: Option<String>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,

    /// Logging verbosity (`quiet`, `normal` or `verbose`).
    pub log_mode: Option<String>,

    /// Output format for command results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns the database file name, falling back to the default.
    #[must_use]
    pub fn database_file(&self) -> &str {
        self.database_file.as_deref().unwrap_or(DATABASE_FILE)
    }

    /// Returns the lock wait in seconds, falling back to the default.
    #[must_use]
    pub fn lock_wait_seconds(&self) -> u64 {
        self.maximum_lock_wait_seconds
            .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS)
    }

    /// Returns whether automatic initialization is disabled.
    #[must_use]
    pub fn autoinit_disabled(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }

    /// Returns the configured log level, if it names a known level.
    #[must_use]
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_mode
            .as_deref()
            .and_then(|mode| LogLevel::parse(mode).ok())
    }

    /// Returns the output format, defaulting to human-readable text.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for command results.
///
/// # Examples
///
/// ```
/// use tablebook::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text meant for people.
    #[default]
    Human,
    /// JSON output format.
    Json,
}

impl OutputFormat {
    /// Parses an output format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not recognized.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.database_file(), DATABASE_FILE);
        assert_eq!(config.lock_wait_seconds(), DEFAULT_LOCK_WAIT_SECONDS);
        assert!(!config.autoinit_disabled());
        assert_eq!(config.log_level(), None);
        assert_eq!(config.output_format(), OutputFormat::Human);
    }

    #[test]
    fn test_config_deserialize() {
        let yaml = r"
database_file: bookings.db
maximum_lock_wait_seconds: 10
disable_autoinit: true
log_mode: verbose
output_format: json
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.database_file(), "bookings.db");
        assert_eq!(config.lock_wait_seconds(), 10);
        assert!(config.autoinit_disabled());
        assert_eq!(config.log_level(), Some(LogLevel::Verbose));
        assert_eq!(config.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let result: Result<Config, _> = serde_yaml::from_str("tables: 12\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("human").unwrap(), OutputFormat::Human);
        assert!(OutputFormat::parse("table").is_err());
    }

    #[test]
    fn test_output_format_serde() {
        let yaml = serde_yaml::to_string(&OutputFormat::Human).unwrap();
        assert_eq!(yaml.trim(), "human");
    }
}
