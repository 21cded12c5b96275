//! Database schema definitions and SQL constants.
//!
//! This module contains the SQL table definitions, indices, and constants
//! for the reservation store.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// `extra` holds any additional fields as a JSON object, or NULL if there
/// are none.
///
/// `AUTOINCREMENT` keeps identifiers strictly increasing, even after rows
/// are removed by hand.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        time TEXT NOT NULL,
        datetime TEXT,
        party INTEGER NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT,
        message TEXT,
        extra TEXT,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create an index on the `datetime` column.
pub const CREATE_DATETIME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_datetime ON reservations(datetime)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a reservation and report its generated id.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (date, time, datetime, party, name, email, phone, message, extra, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
    RETURNING id
";
