//! DTOs for registration and login endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /v1/auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Request body for `POST /v1/auth/login`.
///
/// `password` stays optional so a missing field reaches the service layer,
/// which reports it through the legacy malformed-input path.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: Option<String>,
}

/// Response carrying a freshly issued access token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}
