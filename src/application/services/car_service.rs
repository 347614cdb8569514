//! Car catalogue service.

use std::sync::Arc;

use crate::domain::entities::{Car, NewCar, UpdateCar};
use crate::domain::repositories::{CarQuery, CarRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for listing and administering cars.
pub struct CarService {
    cars: Arc<dyn CarRepository>,
}

impl CarService {
    /// Creates a new car service.
    pub fn new(cars: Arc<dyn CarRepository>) -> Self {
        Self { cars }
    }

    /// Lists cars matching the query together with the total match count.
    ///
    /// The count runs against the same filters so pagination metadata stays
    /// consistent with the page contents.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_cars(&self, query: CarQuery) -> Result<(Vec<Car>, i64), AppError> {
        let count_query = query.clone();
        tokio::try_join!(self.cars.list(query), self.cars.count(count_query))
    }

    /// Retrieves a car by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no car matches the id.
    pub async fn get_car(&self, id: i64) -> Result<Car, AppError> {
        self.cars
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Car not found", json!({ "id": id })))
    }

    /// Creates a new car. The rented flag starts false.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_car(&self, new_car: NewCar) -> Result<Car, AppError> {
        let car = self.cars.create(new_car).await?;
        tracing::info!(car_id = car.id, name = %car.name, "car created");
        Ok(car)
    }

    /// Replaces a car's fields.
    ///
    /// Matching no row is not an error; the endpoint reports a generic
    /// success either way.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_car(&self, id: i64, update: UpdateCar) -> Result<(), AppError> {
        let affected = self.cars.update(id, update).await?;
        tracing::info!(car_id = id, affected, "car updated");
        Ok(())
    }

    /// Deletes a car by id. Idempotent: deleting an unknown id succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_car(&self, id: i64) -> Result<(), AppError> {
        let affected = self.cars.delete(id).await?;
        tracing::info!(car_id = id, affected, "car deleted");
        Ok(())
    }
}
