//! Database layer for persistent storage of reservations.
//!
//! This module provides a SQLite-based store for the reservation pipeline,
//! including connection management, schema versioning, and the insert
//! operation behind [`crate::ReservationStore`].
//!
//! # Examples
//!
//! ```no_run
//! use tablebook::database::{Database, DatabaseConfig};
//! use tablebook::{Reservation, ReservationStore};
//!
//! let config = DatabaseConfig::new("/tmp/tablebook.db");
//! let db = Database::open(config).unwrap();
//!
//! let reservation = Reservation::builder("2017/06/10", "06:02 AM", 4, "Family", "f@example.com").build();
//! let ids = db.insert(&reservation).unwrap();
//! println!("Created {:?}", ids);
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
#[cfg(test)]
pub(crate) mod test_util;

pub use config::{default_data_dir, DatabaseConfig, DATABASE_FILE};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
