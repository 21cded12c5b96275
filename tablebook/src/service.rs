//! Reservation creation.
//!
//! [`ReservationService`] runs the create pipeline: validate once, and only
//! if that succeeds, save once. Whatever error a stage returns is handed to
//! the caller as-is.

use crate::error::{Error, Result};
use crate::repository::ReservationRepository;
use crate::reservation::{Reservation, ReservationId};
use crate::validation::ReservationValidator;

/// Orchestrates validation and persistence of new reservations.
///
/// Both collaborators are injected, so either can be swapped for a test
/// double without touching shared state.
///
/// # Examples
///
/// ```
/// use tablebook::{Database, Reservation, ReservationService, SchemaValidator, StoreRepository};
///
/// let service = ReservationService::new(
///     SchemaValidator::new(),
///     StoreRepository::new(Database::open_in_memory().unwrap()),
/// );
///
/// let reservation = Reservation::builder("2017/06/10", "06:02 AM", 4, "Family", "usename@example.com").build();
/// let id = service.create(Some(reservation)).unwrap();
/// assert_eq!(id.value(), 1);
///
/// assert!(service.create(None).unwrap_err().is_invalid_input());
/// ```
#[derive(Debug)]
pub struct ReservationService<V, R> {
    validator: V,
    repository: R,
}

impl<V: ReservationValidator, R: ReservationRepository> ReservationService<V, R> {
    /// Creates a service from a validator and a repository.
    #[must_use]
    pub const fn new(validator: V, repository: R) -> Self {
        Self {
            validator,
            repository,
        }
    }

    /// Returns the repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Validates and persists a reservation, returning its identifier.
    ///
    /// At most one insert is attempted per call, and none when validation
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns the validator's error if validation fails, the repository's
    /// error if saving fails, or [`Error::NoRowsAffected`] if the repository
    /// reports no generated identifier.
    pub fn create(&self, reservation: Option<Reservation>) -> Result<ReservationId> {
        let validated = self.validator.validate(reservation)?;
        let ids = self.repository.save(&validated)?;

        let id = ids.first().copied().ok_or_else(|| Error::NoRowsAffected {
            details: "No reservation record has been created".into(),
        })?;
        log::info!("Created reservation {id} for {}", validated.name());

        Ok(id)
    }
}
