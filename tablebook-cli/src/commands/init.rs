//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the tablebook data directory and database.

use std::path::PathBuf;

use clap::Args;
use tablebook::operations::init::{init_database, InitOptions};
use tablebook::ConfigBuilder;

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};

/// Initialize tablebook data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Overwrite existing database
    #[arg(long)]
    overwrite: bool,

    /// Create default configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--disable-autoinit` has no effect here. The command's own
    /// `--data-dir` names where to create, and wins over the global flag.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => resolve_data_dir(global)?,
        };

        let config = ConfigBuilder::new()
            .with_data_dir(&data_dir)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let options = InitOptions::new(data_dir)
            .with_database_file(config.database_file())
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config);

        if self.dry_run {
            print_plan(&options);
            return Ok(());
        }

        let result = init_database(&options)?;

        println!("Initialized tablebook in: {}", result.data_dir.display());

        if result.data_dir_created {
            println!("  - Created data directory");
        }

        if result.database_created {
            if self.overwrite {
                println!("  - Recreated database");
            } else {
                println!("  - Created database");
            }
        }

        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}

fn print_plan(options: &InitOptions) {
    let data_dir = &options.data_dir;

    println!("Dry-run mode: no changes will be made");
    println!();
    println!("Would initialize tablebook in: {}", data_dir.display());

    if data_dir.exists() {
        println!("  - Data directory already exists: {}", data_dir.display());
    } else {
        println!("  - Create data directory: {}", data_dir.display());
    }

    let db_path = options.database_path();
    if !db_path.exists() {
        println!("  - Create database: {}", db_path.display());
    } else if options.overwrite {
        println!("  - Remove existing database: {}", db_path.display());
        println!("  - Create new database: {}", db_path.display());
    } else {
        println!(
            "  - ERROR: Database already exists (use --overwrite to replace): {}",
            db_path.display()
        );
    }

    if options.create_config {
        let config_path = options.config_path();
        if config_path.exists() {
            println!(
                "  - Configuration file already exists (will not overwrite): {}",
                config_path.display()
            );
        } else {
            println!("  - Create configuration file: {}", config_path.display());
        }
    }
}
