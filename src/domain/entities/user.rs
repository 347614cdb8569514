//! User entity for registered accounts.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered user.
///
/// `email` is stored lowercased; every lookup normalizes its input the same
/// way. `encrypted_password` holds the argon2 hash and must never reach a
/// response body.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub encrypted_password: String,
    /// Discriminates customer vs admin capability. Value semantics live in
    /// the authorization layer, not here.
    pub role_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub encrypted_password: String,
    pub role_id: i64,
}

/// Role id assigned to self-registered accounts.
pub const CUSTOMER_ROLE_ID: i64 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User {
            id: 1,
            name: "Devi".to_string(),
            email: "devi@example.com".to_string(),
            encrypted_password: "$argon2id$...".to_string(),
            role_id: CUSTOMER_ROLE_ID,
            created_at: Utc::now(),
        };

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "devi@example.com");
        assert_eq!(user.role_id, 2);
    }
}
