//! Error types for the tablebook library.
//!
//! This module provides the error hierarchy for the reservation pipeline,
//! using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a tablebook error.
///
/// # Examples
///
/// ```
/// use tablebook::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tablebook library.
///
/// The pipeline never wraps or replaces an error on its way to the caller,
/// so the variant a caller sees is the one the failing stage produced.
#[derive(Debug, Error)]
pub enum Error {
    /// No reservation was supplied at all.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected.
        reason: String,
    },

    /// A field failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The store accepted an insert but reported no generated identifier.
    #[error("no rows affected: {details}")]
    NoRowsAffected {
        /// Details about the failed write.
        details: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration setting or environment override has an unusable value.
    #[error("invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// The setting or environment variable at fault.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Initialization found an existing database and was not asked to replace it.
    #[error("database already exists at {}; use --overwrite to replace it", path.display())]
    AlreadyInitialized {
        /// Path of the existing database.
        path: PathBuf,
    },

    /// The home directory, and with it the default data directory, is unknown.
    #[error("cannot determine home directory")]
    HomeDirectoryNotFound,

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::validation::ValidationError> for Error {
    fn from(err: crate::validation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error is a user-correctable validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "email".into(),
    ///     message: "must be a valid email address".into(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if error indicates that no reservation was supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::Error;
    ///
    /// let err = Error::InvalidInput { reason: "no reservation supplied".into() };
    /// assert!(err.is_invalid_input());
    /// ```
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns the offending field for validation and configuration errors.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } | Self::InvalidConfig { field, .. } => Some(field),
            _ => None,
        }
    }
}
