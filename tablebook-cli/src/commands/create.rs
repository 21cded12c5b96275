//! Create command implementation.

use clap::Args;
use serde::Serialize;
use tablebook::config::OutputFormat;
use tablebook::{ReservationId, ReservationService, SchemaValidator, StoreRepository};

use crate::commands::reservation_args::ReservationArgs;
use crate::error::CliError;
use crate::utils::{load_configuration, open_database, output_format, GlobalOptions};

/// Validate and store a new reservation.
#[derive(Args)]
pub struct CreateCommand {
    #[command(flatten)]
    pub reservation: ReservationArgs,

    /// Output format (human or json)
    #[arg(long, value_name = "FORMAT", value_parser = OutputFormat::parse)]
    pub format: Option<OutputFormat>,
}

#[derive(Serialize)]
struct CreatedOutput {
    id: ReservationId,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let format = output_format(self.format, &config);
        let reservation = self.reservation.into_reservation()?;

        let db = open_database(global, &config)?;
        let service = ReservationService::new(SchemaValidator::new(), StoreRepository::new(db));
        let id = service.create(reservation)?;

        match format {
            OutputFormat::Human => println!("{id}"),
            OutputFormat::Json => {
                let json = serde_json::to_string(&CreatedOutput { id })
                    .map_err(|e| CliError::Io(e.into()))?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
