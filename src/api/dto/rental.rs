//! DTOs for the rental booking endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Rental;

/// Request body for `POST /v1/cars/{id}/rent`.
///
/// Both fields are optional at the wire level; the service validates the
/// window and derives a missing end date.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentRequest {
    pub rent_started_at: Option<DateTime<Utc>>,
    pub rent_ended_at: Option<DateTime<Utc>>,
}

/// JSON representation of a booked rental.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub id: i64,
    pub user_id: i64,
    pub car_id: i64,
    pub rent_started_at: DateTime<Utc>,
    pub rent_ended_at: Option<DateTime<Utc>>,
}

impl From<Rental> for RentalResponse {
    fn from(rental: Rental) -> Self {
        Self {
            id: rental.id,
            user_id: rental.user_id,
            car_id: rental.car_id,
            rent_started_at: rental.rent_started_at,
            rent_ended_at: rental.rent_ended_at,
        }
    }
}
