//! Reservation input shared by `create` and `validate`.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Args;
use tablebook::Reservation;

use crate::error::CliError;

/// A reservation given either field by field or as a JSON document.
#[derive(Args, Debug)]
pub struct ReservationArgs {
    /// Requested date (YYYY/MM/DD)
    #[arg(long, required_unless_present = "json", conflicts_with = "json")]
    pub date: Option<String>,

    /// Requested time (hh:mm AM/PM)
    #[arg(long, required_unless_present = "json", conflicts_with = "json")]
    pub time: Option<String>,

    /// Number of guests
    #[arg(long, required_unless_present = "json", conflicts_with = "json")]
    pub party: Option<u32>,

    /// Name the booking is held under
    #[arg(long, required_unless_present = "json", conflicts_with = "json")]
    pub name: Option<String>,

    /// Contact email address
    #[arg(long, required_unless_present = "json", conflicts_with = "json")]
    pub email: Option<String>,

    /// Contact phone number
    #[arg(long, conflicts_with = "json")]
    pub phone: Option<String>,

    /// Free-form note for the restaurant
    #[arg(long, conflicts_with = "json")]
    pub message: Option<String>,

    /// Read the reservation from a JSON file ("-" for stdin)
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,
}

impl ReservationArgs {
    /// Builds the reservation to hand to the pipeline.
    ///
    /// A JSON document of `null` yields `None`. Missing required keys are
    /// left for the validator to reject.
    pub fn into_reservation(self) -> Result<Option<Reservation>, CliError> {
        if let Some(path) = self.json {
            return parse_json(&read_input(&path)?);
        }

        match (self.date, self.time, self.party, self.name, self.email) {
            (Some(date), Some(time), Some(party), Some(name), Some(email)) => Ok(Some(
                Reservation::builder(date, time, party, name, email)
                    .phone(self.phone)
                    .message(self.message)
                    .build(),
            )),
            _ => Err(CliError::InvalidArguments(
                "--date, --time, --party, --name and --email are required without --json"
                    .to_string(),
            )),
        }
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut contents = String::new();
        io::stdin().read_to_string(&mut contents)?;
        Ok(contents)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn parse_json(contents: &str) -> Result<Option<Reservation>, CliError> {
    serde_json::from_str(contents)
        .map_err(|e| CliError::InvalidArguments(format!("Invalid reservation JSON: {e}")))
}
