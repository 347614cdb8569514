//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod cars;
pub mod health;
pub mod rentals;

pub use auth::{login_handler, register_handler};
pub use cars::{
    create_car_handler, delete_car_handler, get_car_handler, list_cars_handler,
    update_car_handler,
};
pub use health::health_handler;
pub use rentals::rent_car_handler;
