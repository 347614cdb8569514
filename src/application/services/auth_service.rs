//! Registration and login service.

use std::sync::Arc;

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use serde_json::json;

use crate::application::services::TokenService;
use crate::domain::entities::{CUSTOMER_ROLE_ID, NewUser};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Hashes a plaintext password with argon2 and a fresh salt.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!(error = %e, "password hashing failed");
            AppError::internal("Password hashing failed", json!({}))
        })?;
    Ok(hash.to_string())
}

/// Verifies a plaintext password against a stored argon2 hash.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        tracing::error!(error = %e, "stored password hash is malformed");
        AppError::internal("Malformed password hash", json!({}))
    })?;

    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

/// Service for account registration and credential validation.
///
/// Emails are normalized to lowercase before every lookup and insert.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Registers a new customer account and issues an access token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] with the lowercased email in `details`
    /// when the address is already registered. Returns [`AppError::Internal`]
    /// on hashing or database errors.
    pub async fn register(
        &self,
        name: String,
        email: &str,
        password: &str,
    ) -> Result<String, AppError> {
        let email = email.trim().to_lowercase();

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(
                "Email has already been registered",
                json!({ "email": email }),
            ));
        }

        let encrypted_password = hash_password(password)?;

        let user = self
            .users
            .create(NewUser {
                name,
                email,
                encrypted_password,
                role_id: CUSTOMER_ROLE_ID,
            })
            .await?;

        tracing::info!(user_id = user.id, email = %user.email, "user registered");
        self.tokens.issue(&user)
    }

    /// Validates credentials and issues an access token.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] when the password field is absent
    /// - [`AppError::NotFound`] with the lowercased email when unregistered
    /// - [`AppError::Authentication`] when the password does not match
    pub async fn login(&self, email: &str, password: Option<String>) -> Result<String, AppError> {
        let email = email.trim().to_lowercase();

        let Some(password) = password else {
            return Err(AppError::validation("Illegal arguments", json!({})));
        };

        let user = self.users.find_by_email(&email).await?.ok_or_else(|| {
            AppError::not_found("Email is not registered", json!({ "email": email }))
        })?;

        if !verify_password(&password, &user.encrypted_password)? {
            return Err(AppError::authentication(
                "Wrong password",
                json!({ "message": "Password is wrong" }),
            ));
        }

        tracing::info!(user_id = user.id, email = %user.email, "user logged in");
        self.tokens.issue(&user)
    }
}
