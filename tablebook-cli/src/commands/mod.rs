//! CLI command implementations.
//!
//! - `init`: Initialize the data directory and database
//! - `create`: Validate and store a reservation
//! - `validate`: Check a reservation without storing it
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod create;
pub mod init;
pub mod reservation_args;
pub mod validate;

pub use completions::CompletionsCommand;
pub use create::CreateCommand;
pub use init::InitCommand;
pub use reservation_args::ReservationArgs;
pub use validate::ValidateCommand;
