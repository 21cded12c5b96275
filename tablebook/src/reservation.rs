//! Reservation types for restaurant booking requests.
//!
//! This module provides the booking record handed to the pipeline, the
//! identifier the store assigns to it, and a builder for construction.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Format of the `date` field, e.g. `2017/06/10`.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Format of the `time` field, e.g. `06:02 AM`.
pub const TIME_FORMAT: &str = "%I:%M %p";

/// Identifier assigned to a reservation once it has been persisted.
///
/// Identifiers are issued by the store in increasing order and carry no
/// meaning beyond identity.
///
/// # Examples
///
/// ```
/// use tablebook::ReservationId;
///
/// let id = ReservationId::from(1);
/// assert_eq!(id.value(), 1);
/// assert_eq!(format!("{id}"), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for ReservationId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A restaurant booking request.
///
/// A reservation is immutable once built. Building one performs no checks:
/// the validator decides whether a request is acceptable, so ill-formed
/// requests must still be representable. For the same reason a JSON record
/// with a required field missing still deserializes, with that field left
/// empty (or a party of 0).
///
/// Keys beyond the known fields are kept in [`Reservation::extra`] and
/// stored alongside the record without being inspected.
///
/// # Examples
///
/// ```
/// use tablebook::Reservation;
///
/// let reservation = Reservation::builder("2017/06/10", "06:02 AM", 4, "Family", "family@example.com")
///     .phone(Some("555-0100".to_string()))
///     .build();
///
/// assert_eq!(reservation.party(), 4);
/// assert_eq!(reservation.phone(), Some("555-0100"));
/// assert_eq!(reservation.message(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default)]
    date: String,
    #[serde(default)]
    time: String,
    #[serde(default)]
    party: u32,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl Reservation {
    /// Creates a new reservation builder from the required fields.
    #[must_use]
    pub fn builder(
        date: impl Into<String>,
        time: impl Into<String>,
        party: u32,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> ReservationBuilder {
        ReservationBuilder {
            date: date.into(),
            time: time.into(),
            party,
            name: name.into(),
            email: email.into(),
            phone: None,
            message: None,
            extra: BTreeMap::new(),
        }
    }

    /// Returns the requested date as entered (`YYYY/MM/DD`).
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the requested time as entered (`hh:mm AM`).
    #[must_use]
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Returns the party size.
    #[must_use]
    pub const fn party(&self) -> u32 {
        self.party
    }

    /// Returns the name the booking is held under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the contact email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the optional contact phone number.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the optional free-form message.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns any additional contact or note fields, keyed by name.
    #[must_use]
    pub const fn extra(&self) -> &BTreeMap<String, Value> {
        &self.extra
    }

    /// Combines the date and time fields into a single timestamp.
    ///
    /// Returns `None` if either field does not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::Reservation;
    ///
    /// let ok = Reservation::builder("2017/06/10", "06:02 PM", 2, "A", "a@example.com").build();
    /// assert_eq!(ok.datetime().unwrap().to_string(), "2017-06-10 18:02:00");
    ///
    /// let bad = Reservation::builder("June 10th", "06:02 PM", 2, "A", "a@example.com").build();
    /// assert!(bad.datetime().is_none());
    /// ```
    #[must_use]
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()?;
        let time = NaiveTime::parse_from_str(self.time.trim(), TIME_FORMAT).ok()?;
        Some(date.and_time(time))
    }
}

/// Builder for creating `Reservation` instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    date: String,
    time: String,
    party: u32,
    name: String,
    email: String,
    phone: Option<String>,
    message: Option<String>,
    extra: BTreeMap<String, Value>,
}

impl ReservationBuilder {
    /// Sets the contact phone number.
    #[must_use]
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the free-form message.
    #[must_use]
    pub fn message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    /// Adds a field outside the known set, replacing any earlier value.
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Builds the reservation.
    #[must_use]
    pub fn build(self) -> Reservation {
        Reservation {
            date: self.date,
            time: self.time,
            party: self.party,
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            extra: self.extra,
        }
    }
}
