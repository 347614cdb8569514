//! Rental entity linking a user to a car for an interval.

use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;

/// One booking instance: a user renting a car over a time window.
#[derive(Debug, Clone, FromRow)]
pub struct Rental {
    pub id: i64,
    pub user_id: i64,
    pub car_id: i64,
    pub rent_started_at: DateTime<Utc>,
    /// Nullable in the store; the booking path always populates it.
    pub rent_ended_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Input data for booking a rental.
#[derive(Debug, Clone)]
pub struct NewRental {
    pub user_id: i64,
    pub car_id: i64,
    pub rent_started_at: DateTime<Utc>,
    pub rent_ended_at: DateTime<Utc>,
}

/// Default rental window applied when the caller omits an end date.
pub fn default_rent_end(rent_started_at: DateTime<Utc>) -> DateTime<Utc> {
    rent_started_at + Duration::days(1)
}
