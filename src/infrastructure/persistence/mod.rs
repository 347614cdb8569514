//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements over a shared connection pool.
//!
//! # Repositories
//!
//! - [`PgCarRepository`] - Car storage, filtered listing and administration
//! - [`PgUserRepository`] - Registered-account storage and lookup
//! - [`PgRentalRepository`] - Booking conflicts and transactional booking

pub mod pg_car_repository;
pub mod pg_rental_repository;
pub mod pg_user_repository;

pub use pg_car_repository::PgCarRepository;
pub use pg_rental_repository::PgRentalRepository;
pub use pg_user_repository::PgUserRepository;
