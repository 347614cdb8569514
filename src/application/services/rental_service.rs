//! Rental booking service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{NewRental, Rental, default_rent_end};
use crate::domain::repositories::{CarRepository, RentalRepository};
use crate::error::AppError;

/// Service orchestrating "rent a car" as one logical operation.
pub struct RentalService {
    cars: Arc<dyn CarRepository>,
    rentals: Arc<dyn RentalRepository>,
}

impl RentalService {
    /// Creates a new rental service.
    pub fn new(cars: Arc<dyn CarRepository>, rentals: Arc<dyn RentalRepository>) -> Self {
        Self { cars, rentals }
    }

    /// Reports whether an existing rental blocks the requested window.
    ///
    /// Inclusion rule: an existing rental conflicts when its interval lies
    /// inside `[start, end]`. A wider rental that merely overlaps an edge
    /// does not block. Pure read, no side effects.
    pub async fn has_conflict(
        &self,
        car_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        Ok(self
            .rentals
            .find_contained(car_id, start, end)
            .await?
            .is_some())
    }

    /// Books a car for the given renter and window.
    ///
    /// When `rent_ended_at` is absent it defaults to one day after
    /// `rent_started_at`. The rental insert and the car's rented-flag update
    /// commit in a single transaction.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] when the window is absent
    /// - [`AppError::NotFound`] when the car does not exist
    /// - [`AppError::AlreadyRented`] when an existing rental blocks the window
    pub async fn rent_car(
        &self,
        car_id: i64,
        renter_id: i64,
        rent_started_at: Option<DateTime<Utc>>,
        rent_ended_at: Option<DateTime<Utc>>,
    ) -> Result<Rental, AppError> {
        let (start, end) = match (rent_started_at, rent_ended_at) {
            (Some(start), Some(end)) => (start, end),
            (Some(start), None) => (start, default_rent_end(start)),
            (None, _) => {
                return Err(AppError::validation("Please input rent date", json!({})));
            }
        };

        let car = self
            .cars
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::not_found("Car not found", json!({ "id": car_id })))?;

        if self.has_conflict(car.id, start, end).await? {
            return Err(AppError::already_rented(car.id, &car.name));
        }

        let rental = self
            .rentals
            .book(NewRental {
                user_id: renter_id,
                car_id: car.id,
                rent_started_at: start,
                rent_ended_at: end,
            })
            .await
            .map_err(|e| match e {
                // The in-transaction recheck lost a race; re-attach the car
                // identity the caller expects in the envelope.
                AppError::AlreadyRented { .. } => AppError::already_rented(car.id, &car.name),
                other => other,
            })?;

        tracing::info!(
            rental_id = rental.id,
            car_id = car.id,
            user_id = renter_id,
            "car rented"
        );
        Ok(rental)
    }
}
