//! Application error type and HTTP error envelope.
//!
//! Every failure surfaced to a client is one of the closed set of variants
//! below, serialized as `{"error": {"name", "message", "details"}}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Wire representation of an error inside the response envelope.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub name: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application error variants with their HTTP mappings.
///
/// | variant          | name                    | status |
/// |------------------|-------------------------|--------|
/// | `Validation`     | `ValidationError`       | 500    |
/// | `NotFound`       | `NotFoundError`         | 404    |
/// | `Conflict`       | `ConflictError`         | 422    |
/// | `AlreadyRented`  | `CarAlreadyRentedError` | 422    |
/// | `Authentication` | `AuthenticationError`   | 401    |
/// | `Internal`       | `InternalServerError`   | 500    |
///
/// `Validation` keeps the legacy contract where malformed input falls through
/// to the generic 500 handler instead of a 4xx.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    AlreadyRented { message: String, details: Value },
    #[error("{message}")]
    Authentication { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    /// Booking conflict carrying the car's identity for display.
    pub fn already_rented(car_id: i64, car_name: &str) -> Self {
        Self::AlreadyRented {
            message: format!("{car_name} is already rented!"),
            details: json!({ "id": car_id, "name": car_name }),
        }
    }

    pub fn authentication(message: impl Into<String>, details: Value) -> Self {
        Self::Authentication {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable discriminant used as `error.name` on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "ValidationError",
            Self::NotFound { .. } => "NotFoundError",
            Self::Conflict { .. } => "ConflictError",
            Self::AlreadyRented { .. } => "CarAlreadyRentedError",
            Self::Authentication { .. } => "AuthenticationError",
            Self::Internal { .. } => "InternalServerError",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } | Self::AlreadyRented { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Authentication { .. } => StatusCode::UNAUTHORIZED,
        }
    }

    /// Converts the error into its wire representation.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            Self::Validation { message, details }
            | Self::NotFound { message, details }
            | Self::Conflict { message, details }
            | Self::AlreadyRented { message, details }
            | Self::Authentication { message, details }
            | Self::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            name: self.name(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, name = self.name(), "request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or_else(|_| json!({}));
        AppError::conflict("Validation failed", details)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        AppError::internal("Database error", json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::validation("bad", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::not_found("missing", json!({})).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("taken", json!({})).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::already_rented(1, "Avanza").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::authentication("wrong", json!({})).status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_already_rented_carries_car_identity() {
        let err = AppError::already_rented(7, "Pajero");
        let info = err.to_error_info();

        assert_eq!(info.name, "CarAlreadyRentedError");
        assert_eq!(info.message, "Pajero is already rented!");
        assert_eq!(info.details["id"], 7);
        assert_eq!(info.details["name"], "Pajero");
    }

    #[test]
    fn test_envelope_shape() {
        let err = AppError::not_found("Not found!", json!({ "method": "GET", "path": "/car" }));
        let body = serde_json::to_value(ErrorBody {
            error: err.to_error_info(),
        })
        .unwrap();

        assert_eq!(body["error"]["name"], "NotFoundError");
        assert_eq!(body["error"]["message"], "Not found!");
        assert_eq!(body["error"]["details"]["method"], "GET");
        assert_eq!(body["error"]["details"]["path"], "/car");
    }
}
