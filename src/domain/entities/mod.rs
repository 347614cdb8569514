//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Car`] - A rentable vehicle
//! - [`User`] - A registered account
//! - [`Rental`] - One booking instance linking a user to a car
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewCar`, `NewUser`, `NewRental` - For creating new records
//! - `UpdateCar` - For full-replacement updates

pub mod car;
pub mod rental;
pub mod user;

pub use car::{Car, NewCar, UpdateCar};
pub use rental::{NewRental, Rental, default_rent_end};
pub use user::{CUSTOMER_ROLE_ID, NewUser, User};
