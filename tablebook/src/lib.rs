#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tablebook
//!
//! A library for validating and persisting restaurant reservations.
//!
//! A request flows through three stages: a [`ReservationValidator`] accepts
//! or rejects it, a [`ReservationRepository`] records it, and the
//! [`ReservationService`] ties the two together and hands back the new
//! reservation's identifier.
//!
//! ## Core Types
//!
//! - [`Reservation`] and [`ReservationId`]: the booking request and its key
//! - [`SchemaValidator`]: the field rules every request must satisfy
//! - [`StoreRepository`] and [`Database`]: persistence into `SQLite`
//! - [`ReservationService`]: the validate-then-save pipeline
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use tablebook::{Database, Reservation, ReservationService, SchemaValidator, StoreRepository};
//!
//! let service = ReservationService::new(
//!     SchemaValidator::new(),
//!     StoreRepository::new(Database::open_in_memory().unwrap()),
//! );
//!
//! let reservation = Reservation::builder("2017/06/10", "06:02 AM", 4, "Family", "usename@example.com")
//!     .message(Some("Birthday".to_string()))
//!     .build();
//!
//! let id = service.create(Some(reservation)).unwrap();
//! assert_eq!(id.value(), 1);
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod repository;
pub mod reservation;
pub mod service;
pub mod validation;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{
    init_logger, DiagnosticEvent, Diagnostics, LogDiagnostics, LogLevel, Logger,
};
pub use repository::{ReservationRepository, ReservationStore, StoreRepository};
pub use reservation::{Reservation, ReservationBuilder, ReservationId};
pub use service::ReservationService;
pub use validation::{ReservationValidator, SchemaValidator, ValidationError};
