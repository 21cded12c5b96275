//! Data directory initialization.
//!
//! This module provides functionality for explicitly initializing the
//! tablebook data directory and database, with optional configuration file
//! creation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;
use crate::database::DATABASE_FILE;
use crate::error::{Error, Result};
use crate::{Database, DatabaseConfig};

/// Options for database initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Database file name inside the data directory.
    pub database_file: String,
    /// Overwrite existing database if it exists.
    pub overwrite: bool,
    /// Create a default configuration file.
    pub create_config: bool,
}

impl InitOptions {
    /// Creates new initialization options.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            database_file: DATABASE_FILE.to_string(),
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets the database file name.
    #[must_use]
    pub fn with_database_file(mut self, database_file: impl Into<String>) -> Self {
        self.database_file = database_file.into();
        self
    }

    /// Sets whether to overwrite existing database.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create default configuration file.
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }

    /// Path of the database these options would create.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }

    /// Path of the configuration file these options would create.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }
}

/// Result of initialization operation.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was created.
    pub config_created: bool,
    /// Path to the data directory.
    pub data_dir: PathBuf,
}

/// Configuration template written by `init --with-config`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r"# tablebook configuration file
# Every setting is optional. Environment variables (TABLEBOOK_*) win over
# values set here.

# Database file name inside this directory (default: tablebook.db)
# database_file: tablebook.db

# Maximum lock wait time in seconds (default: 5)
# maximum_lock_wait_seconds: 5

# Refuse to create the database implicitly (default: false)
# disable_autoinit: false

# Log verbosity: quiet, normal or verbose (default: normal)
# log_mode: normal

# Output format for command results: human or json (default: human)
# output_format: human
";

/// Initializes the tablebook data directory and database.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The database cannot be initialized
/// - The configuration file cannot be written
/// - Overwrite is false and the database already exists ([`Error::AlreadyInitialized`])
///
/// # Examples
///
/// ```no_run
/// use tablebook::operations::init::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/tablebook-test"))
///     .with_create_config(true);
///
/// let result = init_database(&options).unwrap();
/// println!("Database created: {}", result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.database_path();
    let db_exists = db_path.exists();

    if db_exists && !options.overwrite {
        return Err(Error::AlreadyInitialized { path: db_path });
    }

    if db_exists {
        remove_database_files(&db_path)?;
    }

    Database::open(DatabaseConfig::new(&db_path))?;
    result.database_created = true;
    log::debug!("Initialized database at {}", db_path.display());

    if options.create_config {
        let config_path = options.config_path();
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}

/// Removes a database file along with its WAL sidecar files.
fn remove_database_files(db_path: &Path) -> Result<()> {
    fs::remove_file(db_path)?;

    for suffix in ["-wal", "-shm"] {
        let mut sidecar = db_path.as_os_str().to_owned();
        sidecar.push(suffix);
        let sidecar = PathBuf::from(sidecar);
        if sidecar.exists() {
            fs::remove_file(sidecar)?;
        }
    }

    Ok(())
}
