//! Main entry point for the tablebook CLI.
//!
//! This is the command-line interface for the reservation pipeline:
//! - `init`: Initialize the data directory and database
//! - `create`: Validate and store a reservation
//! - `validate`: Check a reservation without storing it
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let global = cli.global_options();

    if let Err(e) = utils::build_logger(&global).install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Create(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
