//! Handlers for registration and login endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, RegisterRequest, TokenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /v1/auth/register`
///
/// # Errors
///
/// Returns 422 with the lowercased email in `error.details` when the address
/// is already registered.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    payload.validate()?;

    let access_token = state
        .auth_service
        .register(payload.name, &payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(TokenResponse { access_token })))
}

/// Validates credentials and returns an access token.
///
/// # Endpoint
///
/// `POST /v1/auth/login`
///
/// # Errors
///
/// - 404 when the email is not registered (`error.details.email` lowercased)
/// - 401 when the password does not match (`error.details.message`)
/// - 500 when the password field is missing (legacy malformed-input mapping)
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let access_token = state
        .auth_service
        .login(&payload.email, payload.password)
        .await?;

    Ok(Json(TokenResponse { access_token }))
}
