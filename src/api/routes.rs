//! API route configuration.
//!
//! The booking endpoint authenticates callers through the
//! [`crate::api::middleware::auth::AuthUser`] extractor; the remaining
//! endpoints are open.

use crate::api::handlers::{
    create_car_handler, delete_car_handler, get_car_handler, list_cars_handler, login_handler,
    register_handler, rent_car_handler, update_car_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Versioned API routes mounted under `/v1`.
///
/// # Endpoints
///
/// - `POST   /auth/register`   - Register an account, returns an access token
/// - `POST   /auth/login`      - Validate credentials, returns an access token
/// - `GET    /cars`            - List cars (size/availability filters, paginated)
/// - `POST   /cars`            - Create a car
/// - `GET    /cars/{id}`       - Fetch one car
/// - `PUT    /cars/{id}`       - Replace a car
/// - `DELETE /cars/{id}`       - Delete a car (idempotent)
/// - `POST   /cars/{id}/rent`  - Book a car (Bearer token required)
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/cars", get(list_cars_handler).post(create_car_handler))
        .route(
            "/cars/{id}",
            get(get_car_handler)
                .put(update_car_handler)
                .delete(delete_car_handler),
        )
        .route("/cars/{id}/rent", post(rent_car_handler))
}
