//! Repository trait for car data access.

use crate::domain::entities::{Car, NewCar, UpdateCar};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Filter criteria for car list queries.
///
/// `size` narrows the result set by exact category match. `available_at`
/// constrains the joined rental records to those still active on or after the
/// given date; it mirrors the list endpoint's optional join and does not
/// remove cars from the result.
#[derive(Debug, Clone)]
pub struct CarQuery {
    pub size: Option<String>,
    pub available_at: Option<DateTime<Utc>>,
    pub offset: i64,
    pub limit: i64,
}

impl CarQuery {
    /// Creates a new query with pagination parameters.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            size: None,
            available_at: None,
            offset,
            limit,
        }
    }

    /// Adds size-category filtering to the query.
    pub fn with_size(mut self, size: Option<String>) -> Self {
        self.size = size;
        self
    }

    /// Adds the availability-date join constraint to the query.
    pub fn with_available_at(mut self, available_at: Option<DateTime<Utc>>) -> Self {
        self.available_at = available_at;
        self
    }
}

/// Repository interface for managing cars.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCarRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Creates a new car with `is_currently_rented` initialized to false.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_car: NewCar) -> Result<Car, AppError>;

    /// Finds a car by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Car))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError>;

    /// Lists cars matching the query filters, paginated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, query: CarQuery) -> Result<Vec<Car>, AppError>;

    /// Counts cars matching the query filters (pagination ignored).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self, query: CarQuery) -> Result<i64, AppError>;

    /// Replaces a car's fields and resets its rented flag.
    ///
    /// Returns the number of rows affected; zero means no car matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UpdateCar) -> Result<u64, AppError>;

    /// Deletes a car by id.
    ///
    /// Returns the number of rows affected. Deleting an unknown id is not an
    /// error; the caller treats the operation as idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}
