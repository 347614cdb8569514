//! Bearer token authentication extractor.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_auth::AuthBearer;
use serde_json::json;

use crate::application::services::TokenService;
use crate::error::AppError;

/// The authenticated caller, extracted from a Bearer access token.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// Rejects with `401 Unauthorized` (standard error envelope) when the header
/// is missing, malformed, or carries an invalid or expired token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: i64,
    pub role_id: i64,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<TokenService>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthBearer(token) = AuthBearer::from_request_parts(parts, &())
            .await
            .map_err(|_| {
                AppError::authentication(
                    "Unauthorized",
                    json!({ "reason": "Authorization header is missing or invalid" }),
                )
            })?;

        let tokens = Arc::<TokenService>::from_ref(state);
        let claims = tokens.verify(&token)?;

        Ok(AuthUser {
            id: claims.sub,
            role_id: claims.role_id,
        })
    }
}
