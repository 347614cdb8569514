//! PostgreSQL implementation of the rental repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRental, Rental};
use crate::domain::repositories::RentalRepository;
use crate::error::AppError;

const RENTAL_COLUMNS: &str = "id, user_id, car_id, rent_started_at, rent_ended_at, created_at";

/// PostgreSQL repository for rental bookings.
pub struct PgRentalRepository {
    pool: Arc<PgPool>,
}

impl PgRentalRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RentalRepository for PgRentalRepository {
    async fn find_contained(
        &self,
        car_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Option<Rental>, AppError> {
        // Inclusion test, not interval overlap: only rentals whose whole
        // interval lies inside [start, end] match. NULL end dates never do.
        let rental = sqlx::query_as::<_, Rental>(&format!(
            r#"
            SELECT {RENTAL_COLUMNS}
            FROM rentals
            WHERE car_id = $1 AND rent_started_at >= $2 AND rent_ended_at <= $3
            LIMIT 1
            "#
        ))
        .bind(car_id)
        .bind(start)
        .bind(end)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(rental)
    }

    async fn book(&self, new_rental: NewRental) -> Result<Rental, AppError> {
        let mut tx = self.pool.begin().await?;

        // Serializable isolation makes the recheck-insert-update sequence
        // safe against a concurrent booking committing in between.
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await?;

        let conflicting = sqlx::query_as::<_, Rental>(&format!(
            r#"
            SELECT {RENTAL_COLUMNS}
            FROM rentals
            WHERE car_id = $1 AND rent_started_at >= $2 AND rent_ended_at <= $3
            LIMIT 1
            "#
        ))
        .bind(new_rental.car_id)
        .bind(new_rental.rent_started_at)
        .bind(new_rental.rent_ended_at)
        .fetch_optional(&mut *tx)
        .await?;

        if conflicting.is_some() {
            return Err(AppError::AlreadyRented {
                message: "Car is already rented!".to_string(),
                details: json!({ "id": new_rental.car_id }),
            });
        }

        let rental = sqlx::query_as::<_, Rental>(&format!(
            r#"
            INSERT INTO rentals (user_id, car_id, rent_started_at, rent_ended_at)
            VALUES ($1, $2, $3, $4)
            RETURNING {RENTAL_COLUMNS}
            "#
        ))
        .bind(new_rental.user_id)
        .bind(new_rental.car_id)
        .bind(new_rental.rent_started_at)
        .bind(new_rental.rent_ended_at)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE cars SET is_currently_rented = TRUE, updated_at = NOW() WHERE id = $1")
            .bind(new_rental.car_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(rental)
    }
}
