//! Reservation persistence.
//!
//! The repository is a thin layer over a [`ReservationStore`]: it records a
//! diagnostic event (contact details stay out of it), forwards the
//! reservation to the store unchanged, and
//! hands back whatever identifiers the store generated. Store errors pass
//! through untouched.

use crate::error::Result;
use crate::logging::{DiagnosticEvent, Diagnostics, LogDiagnostics};
use crate::reservation::{Reservation, ReservationId};

const DIAGNOSTIC_TARGET: &str = "tablebook::repository";

/// Backing store scoped to the reservations table.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationStore {
    /// Inserts one reservation and returns the generated identifiers.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying storage engine.
    fn insert(&self, reservation: &Reservation) -> Result<Vec<ReservationId>>;
}

/// Persistence capability used by the reservation service.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationRepository {
    /// Persists an already validated reservation.
    ///
    /// # Errors
    ///
    /// Returns the store's error unchanged.
    fn save(&self, reservation: &Reservation) -> Result<Vec<ReservationId>>;

    /// Read path placeholder. Performs no work and never touches the store.
    fn fetch(&self);
}

/// Repository that writes through a [`ReservationStore`].
///
/// # Examples
///
/// ```
/// use tablebook::{Database, Reservation, ReservationRepository, StoreRepository};
///
/// let repository = StoreRepository::new(Database::open_in_memory().unwrap());
/// let reservation = Reservation::builder("2017/06/10", "06:02 AM", 4, "Family", "f@example.com").build();
///
/// let ids = repository.save(&reservation).unwrap();
/// assert_eq!(ids.len(), 1);
/// ```
#[derive(Debug)]
pub struct StoreRepository<S, D = LogDiagnostics> {
    store: S,
    diagnostics: D,
}

impl<S: ReservationStore> StoreRepository<S> {
    /// Creates a repository that reports to the `log` facade.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            diagnostics: LogDiagnostics,
        }
    }
}

impl<S: ReservationStore, D: Diagnostics> StoreRepository<S, D> {
    /// Creates a repository with an explicit diagnostics sink.
    #[must_use]
    pub const fn with_diagnostics(store: S, diagnostics: D) -> Self {
        Self { store, diagnostics }
    }

    /// Returns the backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ReservationStore, D: Diagnostics> ReservationRepository for StoreRepository<S, D> {
    fn save(&self, reservation: &Reservation) -> Result<Vec<ReservationId>> {
        self.diagnostics.emit(&DiagnosticEvent::new(
            DIAGNOSTIC_TARGET,
            format!(
                "Saving reservation for {} on {} at {} (party of {})",
                reservation.name(),
                reservation.date(),
                reservation.time(),
                reservation.party()
            ),
        ));

        self.store.insert(reservation)
    }

    fn fetch(&self) {}
}
