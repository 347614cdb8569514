//! Handler for the rental booking endpoint.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::rental::{RentRequest, RentalResponse};
use crate::api::middleware::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Books a car for the authenticated user.
///
/// # Endpoint
///
/// `POST /v1/cars/{id}/rent`
///
/// When `rentEndedAt` is absent the booking runs one day from
/// `rentStartedAt`.
///
/// # Errors
///
/// - 404 when the car does not exist
/// - 422 with the already-rented envelope when the window is blocked
/// - 500 when both dates are missing (legacy malformed-input mapping)
pub async fn rent_car_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    user: AuthUser,
    Json(payload): Json<RentRequest>,
) -> Result<(StatusCode, Json<RentalResponse>), AppError> {
    let rental = state
        .rental_service
        .rent_car(id, user.id, payload.rent_started_at, payload.rent_ended_at)
        .await?;

    Ok((StatusCode::CREATED, Json(rental.into())))
}
