//! Reservation writes.
//!
//! The store layer persists exactly what it is handed. Validation happens
//! upstream, so nothing here inspects field contents.

use chrono::Utc;
use rusqlite::params;
use serde_json::Value;

use crate::error::Result;
use crate::repository::ReservationStore;
use crate::reservation::{Reservation, ReservationId};

use super::connection::Database;
use super::schema::INSERT_RESERVATION;

/// Storage form of the combined reservation time.
const DATETIME_COLUMN_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

impl ReservationStore for Database {
    fn insert(&self, reservation: &Reservation) -> Result<Vec<ReservationId>> {
        let datetime = reservation
            .datetime()
            .map(|dt| dt.format(DATETIME_COLUMN_FORMAT).to_string());
        let extra = (!reservation.extra().is_empty())
            .then(|| Value::Object(reservation.extra().clone().into_iter().collect()).to_string());

        let mut stmt = self.conn.prepare_cached(INSERT_RESERVATION)?;
        let ids = stmt
            .query_map(
                params![
                    reservation.date(),
                    reservation.time(),
                    datetime,
                    reservation.party(),
                    reservation.name(),
                    reservation.email(),
                    reservation.phone(),
                    reservation.message(),
                    extra,
                    Utc::now().timestamp(),
                ],
                |row| row.get::<_, i64>(0).map(ReservationId::from),
            )?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        log::debug!("Inserted reservation rows {ids:?}");
        Ok(ids)
    }
}
