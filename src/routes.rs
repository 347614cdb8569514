//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`   - Health probe (public)
//! - `/v1/*`   - REST API (booking requires a Bearer token)
//! - `*`       - Structured 404 envelope identifying method and path
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::error::AppError;
use crate::state::AppState;
use axum::http::{Method, Uri};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application routes without path normalization.
///
/// Exposed separately so tests can drive the router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .nest("/v1", api::routes::v1_routes())
        .fallback(route_not_found)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Fallback for unmatched routes: a 404 envelope naming the method and path.
async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::not_found(
        "Not found!",
        json!({ "method": method.as_str(), "path": uri.path() }),
    )
}
