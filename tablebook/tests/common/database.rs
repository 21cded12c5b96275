//! Shared database test utilities.

use std::path::Path;

use tablebook::database::{Database, DatabaseConfig};

/// Creates a temporary test database that will be cleaned up when dropped.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Counts the rows in the reservations table of the database at `path`.
#[allow(dead_code)]
pub fn count_reservations(path: &Path) -> i64 {
    let conn = rusqlite::Connection::open(path).unwrap();
    conn.query_row("SELECT COUNT(*) FROM reservations", [], |row| row.get(0))
        .unwrap()
}
