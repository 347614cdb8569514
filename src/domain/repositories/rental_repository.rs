//! Repository trait for rental bookings.

use crate::domain::entities::{NewRental, Rental};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for rental records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRentalRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Finds a rental for the car whose interval is contained in the
    /// requested window.
    ///
    /// The match is an inclusion test: an existing rental conflicts when
    /// `rent_started_at >= start AND rent_ended_at <= end`. Rentals without
    /// an end date never match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_contained(
        &self,
        car_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Option<Rental>, AppError>;

    /// Books a rental: inserts the record and sets the car's
    /// `is_currently_rented` flag in a single transaction.
    ///
    /// The inclusion check is re-run inside the transaction so two concurrent
    /// bookings for overlapping windows cannot both commit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AlreadyRented`] when a conflicting rental was
    /// committed between the caller's availability check and the
    /// transaction. Returns [`AppError::Internal`] on database errors.
    async fn book(&self, new_rental: NewRental) -> Result<Rental, AppError>;
}
