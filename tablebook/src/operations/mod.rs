//! Administrative operations on the tablebook data directory.

pub mod init;

pub use init::{init_database, InitOptions, InitResult};
