//! DTOs for car endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::dto::pagination::PaginationMeta;
use crate::domain::entities::Car;

/// Request body for `POST /v1/cars` and `PUT /v1/cars/{id}`.
///
/// `name` is kept as a raw JSON value: the endpoints own the "name must be a
/// string" check and answer it with the 422 envelope rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CarPayload {
    #[serde(default)]
    pub name: Value,
    pub price: i64,
    pub size: String,
    pub image: String,
}

impl CarPayload {
    /// Returns the name when it is a JSON string.
    pub fn name_str(&self) -> Option<&str> {
        self.name.as_str()
    }
}

/// JSON representation of a car.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub size: String,
    pub image: String,
    pub is_currently_rented: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            name: car.name,
            price: car.price,
            size: car.size,
            image: car.image,
            is_currently_rented: car.is_currently_rented,
            created_at: car.created_at,
            updated_at: car.updated_at,
        }
    }
}

/// Response for the paginated car list.
#[derive(Debug, Serialize)]
pub struct CarListResponse {
    pub cars: Vec<CarResponse>,
    pub meta: ListMeta,
}

/// Metadata wrapper for list responses.
#[derive(Debug, Serialize)]
pub struct ListMeta {
    pub pagination: PaginationMeta,
}

/// Generic success message for update and delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
