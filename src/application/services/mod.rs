//! Business logic services for the application layer.

pub mod auth_service;
pub mod car_service;
pub mod rental_service;
pub mod token_service;

pub use auth_service::AuthService;
pub use car_service::CarService;
pub use rental_service::RentalService;
pub use token_service::{Claims, TokenService};
