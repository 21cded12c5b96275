//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use tablebook::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { maximum_lock_wait_seconds: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref file) = config.database_file {
            Self::validate_file_name("database_file", file)?;
        }

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::InvalidConfig {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        if let Some(ref mode) = config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::InvalidConfig {
                field: "log_mode".into(),
                message,
            })?;
        }

        Ok(())
    }

    /// The database file must be a bare file name inside the data directory.
    fn validate_file_name(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::InvalidConfig {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains(['/', '\\', '\0']) {
            return Err(Error::InvalidConfig {
                field: field.into(),
                message: "Must be a file name without path separators".into(),
            });
        }

        if trimmed == "." || trimmed == ".." {
            return Err(Error::InvalidConfig {
                field: field.into(),
                message: "Must name a file".into(),
            });
        }

        Ok(())
    }
}
