//! PostgreSQL implementation of the car repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Car, NewCar, UpdateCar};
use crate::domain::repositories::{CarQuery, CarRepository};
use crate::error::AppError;

/// PostgreSQL repository for car storage and retrieval.
///
/// Uses runtime-bound prepared statements; rows map onto [`Car`] via
/// `sqlx::FromRow`.
pub struct PgCarRepository {
    pool: Arc<PgPool>,
}

impl PgCarRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PgCarRepository {
    async fn create(&self, new_car: NewCar) -> Result<Car, AppError> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (name, price, size, image, is_currently_rented)
            VALUES ($1, $2, $3, $4, FALSE)
            RETURNING id, name, price, size, image, is_currently_rented, created_at, updated_at
            "#,
        )
        .bind(&new_car.name)
        .bind(new_car.price)
        .bind(&new_car.size)
        .bind(&new_car.image)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(car)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            SELECT id, name, price, size, image, is_currently_rented, created_at, updated_at
            FROM cars
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(car)
    }

    async fn list(&self, query: CarQuery) -> Result<Vec<Car>, AppError> {
        // The rentals join mirrors the list endpoint's optional include: the
        // availability date constrains joined rentals but never removes cars,
        // so DISTINCT collapses the duplicates it introduces.
        let cars = sqlx::query_as::<_, Car>(
            r#"
            SELECT DISTINCT c.id, c.name, c.price, c.size, c.image,
                   c.is_currently_rented, c.created_at, c.updated_at
            FROM cars c
            LEFT JOIN rentals r
                ON r.car_id = c.id
               AND ($2::timestamptz IS NULL OR r.rent_ended_at >= $2)
            WHERE ($1::text IS NULL OR c.size = $1)
            ORDER BY c.id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(&query.size)
        .bind(query.available_at)
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(cars)
    }

    async fn count(&self, query: CarQuery) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(DISTINCT c.id)
            FROM cars c
            LEFT JOIN rentals r
                ON r.car_id = c.id
               AND ($2::timestamptz IS NULL OR r.rent_ended_at >= $2)
            WHERE ($1::text IS NULL OR c.size = $1)
            "#,
        )
        .bind(&query.size)
        .bind(query.available_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, update: UpdateCar) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE cars
            SET name = $2, price = $3, size = $4, image = $5,
                is_currently_rented = FALSE, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&update.name)
        .bind(update.price)
        .bind(&update.size)
        .bind(&update.image)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
