//! Reservation validation.
//!
//! The validator is the gate at the front of the pipeline. It either hands
//! back the reservation it was given, untouched, or rejects it with the first
//! rule that failed.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::reservation::{Reservation, DATE_FORMAT, TIME_FORMAT};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Smallest party the restaurant will book.
pub const MIN_PARTY_SIZE: u32 = 1;

/// Checks whether a string has the shape of an email address.
///
/// # Examples
///
/// ```
/// use tablebook::validation::is_valid_email;
///
/// assert!(is_valid_email("usename@example.com"));
/// assert!(!is_valid_email("username"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Capability to accept or reject a reservation request.
///
/// Implementations must return the very reservation they were given on
/// success and must not have side effects.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationValidator {
    /// Validates a reservation request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `reservation` is `None`, and
    /// [`Error::Validation`] for the first rule the reservation breaks.
    fn validate(&self, reservation: Option<Reservation>) -> Result<Reservation>;
}

/// The reservation schema: name, email, date, time and party rules.
///
/// Optional fields (`phone`, `message`) are never inspected.
///
/// # Examples
///
/// ```
/// use tablebook::{Reservation, ReservationValidator, SchemaValidator};
///
/// let validator = SchemaValidator::new();
/// let reservation = Reservation::builder("2017/06/10", "06:02 AM", 4, "Family", "usename@example.com").build();
///
/// let validated = validator.validate(Some(reservation.clone())).unwrap();
/// assert_eq!(validated, reservation);
///
/// assert!(validator.validate(None).unwrap_err().is_invalid_input());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl SchemaValidator {
    /// Creates a new schema validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Collects every rule the reservation breaks, in rule order.
    ///
    /// An empty vector means the reservation is valid.
    #[must_use]
    pub fn violations(&self, reservation: &Reservation) -> Vec<ValidationError> {
        let mut violations = Vec::new();

        if reservation.name().trim().is_empty() {
            violations.push(ValidationError::new(
                "name",
                "Cannot be empty or only whitespace",
            ));
        }

        if reservation.email().is_empty() {
            violations.push(ValidationError::new("email", "Cannot be empty"));
        } else if !is_valid_email(reservation.email()) {
            violations.push(ValidationError::new(
                "email",
                format!("'{}' is not a valid email address", reservation.email()),
            ));
        }

        if NaiveDate::parse_from_str(reservation.date().trim(), DATE_FORMAT).is_err() {
            violations.push(ValidationError::new(
                "date",
                format!("'{}' is not a date in YYYY/MM/DD form", reservation.date()),
            ));
        }

        if NaiveTime::parse_from_str(reservation.time().trim(), TIME_FORMAT).is_err() {
            violations.push(ValidationError::new(
                "time",
                format!("'{}' is not a time in hh:mm AM/PM form", reservation.time()),
            ));
        }

        if reservation.party() < MIN_PARTY_SIZE {
            violations.push(ValidationError::new(
                "party",
                format!("Must be at least {MIN_PARTY_SIZE}"),
            ));
        }

        violations
    }
}

impl ReservationValidator for SchemaValidator {
    fn validate(&self, reservation: Option<Reservation>) -> Result<Reservation> {
        let Some(reservation) = reservation else {
            return Err(Error::InvalidInput {
                reason: "no reservation supplied".into(),
            });
        };

        if let Some(first) = self.violations(&reservation).into_iter().next() {
            return Err(first.into());
        }

        Ok(reservation)
    }
}


#[cfg(test)]
mod proptests;
