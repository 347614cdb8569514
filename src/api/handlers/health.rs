//! Handler for the root health probe.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports that the service is up.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// { "status": "OK", "message": "BCR API is up and running!" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "BCR API is up and running!",
    })
}
