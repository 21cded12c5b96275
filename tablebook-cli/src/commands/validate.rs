//! Command to check a reservation without storing it.

use clap::Args;
use serde::Serialize;
use tablebook::config::OutputFormat;
use tablebook::SchemaValidator;

use crate::commands::reservation_args::ReservationArgs;
use crate::error::CliError;
use crate::utils::{load_configuration, output_format, GlobalOptions};

/// Check a reservation against the booking rules.
#[derive(Args)]
pub struct ValidateCommand {
    #[command(flatten)]
    pub reservation: ReservationArgs,

    /// Output format (human or json)
    #[arg(long, value_name = "FORMAT", value_parser = OutputFormat::parse)]
    pub format: Option<OutputFormat>,
}

#[derive(Serialize)]
struct Violation<'a> {
    field: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct ValidationReport<'a> {
    valid: bool,
    violations: Vec<Violation<'a>>,
}

impl ValidateCommand {
    /// Execute the validate command.
    ///
    /// Every broken rule is reported, not just the first.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let format = output_format(self.format, &config);

        let Some(reservation) = self.reservation.into_reservation()? else {
            return Err(CliError::SemanticFailure(
                "No reservation supplied".to_string(),
            ));
        };

        let violations = SchemaValidator::new().violations(&reservation);
        let valid = violations.is_empty();
        log::debug!("Reservation broke {} rule(s)", violations.len());

        match format {
            OutputFormat::Human => {
                if valid {
                    println!("Reservation is valid");
                } else {
                    for violation in &violations {
                        println!("{}: {}", violation.field, violation.message);
                    }
                }
            }
            OutputFormat::Json => {
                let report = ValidationReport {
                    valid,
                    violations: violations
                        .iter()
                        .map(|v| Violation {
                            field: &v.field,
                            message: &v.message,
                        })
                        .collect(),
                };
                let json = serde_json::to_string(&report).map_err(|e| CliError::Io(e.into()))?;
                println!("{json}");
            }
        }

        if valid {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "Reservation failed {} rule(s)",
                violations.len()
            )))
        }
    }
}
