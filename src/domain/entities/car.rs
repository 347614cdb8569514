//! Car entity representing a rentable vehicle.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A car available for rent.
///
/// `is_currently_rented` is a denormalized projection of "has an active
/// rental" kept for display. Conflict detection always reads rental records,
/// never this flag.
#[derive(Debug, Clone, FromRow)]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub price: i64,
    /// Size category: `"small"`, `"medium"` or `"large"`.
    pub size: String,
    pub image: String,
    pub is_currently_rented: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    /// Creates a new Car instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        name: String,
        price: i64,
        size: String,
        image: String,
        is_currently_rented: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            size,
            image,
            is_currently_rented,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new car.
///
/// New cars always start with `is_currently_rented = false`.
#[derive(Debug, Clone)]
pub struct NewCar {
    pub name: String,
    pub price: i64,
    pub size: String,
    pub image: String,
}

/// Full replacement payload for an existing car.
///
/// Mirrors the administrative update form: the rented flag is reset to false
/// alongside the other fields.
#[derive(Debug, Clone)]
pub struct UpdateCar {
    pub name: String,
    pub price: i64,
    pub size: String,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_creation() {
        let now = Utc::now();
        let car = Car::new(
            1,
            "Avanza".to_string(),
            100,
            "small".to_string(),
            "https://example.com/avanza.jpg".to_string(),
            false,
            now,
            now,
        );

        assert_eq!(car.id, 1);
        assert_eq!(car.name, "Avanza");
        assert_eq!(car.price, 100);
        assert_eq!(car.size, "small");
        assert!(!car.is_currently_rented);
        assert_eq!(car.created_at, now);
    }

    #[test]
    fn test_new_car_creation() {
        let new_car = NewCar {
            name: "Pajero".to_string(),
            price: 500,
            size: "large".to_string(),
            image: "https://example.com/pajero.jpg".to_string(),
        };

        assert_eq!(new_car.name, "Pajero");
        assert_eq!(new_car.price, 500);
        assert_eq!(new_car.size, "large");
    }
}
