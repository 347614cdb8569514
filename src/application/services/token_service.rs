//! JWT issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::User;
use crate::error::AppError;

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i64,
    /// Role discriminant, forwarded for downstream authorization.
    pub role_id: i64,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies HS256 access tokens.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Issues an access token for the given user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            role_id: user.role_id,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|e| {
            tracing::error!(error = %e, user_id = user.id, "token signing failed");
            AppError::internal("Token signing failed", json!({}))
        })
    }

    /// Verifies a token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Authentication`] when the token is invalid or
    /// expired.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let data =
            decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(|_| {
                AppError::authentication(
                    "Unauthorized",
                    json!({ "reason": "Invalid or expired token" }),
                )
            })?;

        Ok(data.claims)
    }
}
