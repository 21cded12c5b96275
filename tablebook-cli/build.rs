//! Build script for tablebook-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here by hand.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn reservation_args() -> Vec<Arg> {
    vec![
        Arg::new("date")
            .long("date")
            .value_name("YYYY/MM/DD")
            .help("Requested date"),
        Arg::new("time")
            .long("time")
            .value_name("HH:MM AM|PM")
            .help("Requested time"),
        Arg::new("party")
            .long("party")
            .value_name("N")
            .help("Number of guests"),
        Arg::new("name")
            .long("name")
            .help("Name the booking is held under"),
        Arg::new("email").long("email").help("Contact email address"),
        Arg::new("phone").long("phone").help("Contact phone number"),
        Arg::new("message")
            .long("message")
            .help("Free-form note for the restaurant"),
        Arg::new("json")
            .long("json")
            .value_name("PATH")
            .help("Read the reservation from a JSON file (\"-\" for stdin)"),
        Arg::new("format")
            .long("format")
            .value_name("FORMAT")
            .help("Output format (human or json)"),
    ]
}

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("tablebook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate and store restaurant reservations")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("TABLEBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the configured busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("TABLEBOOK_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(ArgAction::SetTrue)
                .env("TABLEBOOK_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Create the data directory, the database and optionally a commented configuration file"),
            Command::new("create")
                .about("Validate and store a reservation")
                .long_about("Validate a reservation and store it, printing the new reservation id")
                .args(reservation_args()),
            Command::new("validate")
                .about("Check a reservation without storing it")
                .long_about("Report every booking rule a reservation breaks; exits 1 if any")
                .args(reservation_args()),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("tablebook.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
