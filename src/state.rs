//! Shared application state injected into all handlers.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::application::services::{AuthService, CarService, RentalService, TokenService};

/// Service container cloned into every request handler.
///
/// Services hold their repositories as injected `Arc<dyn …>` dependencies,
/// so tests can assemble a state over fakes without a live store.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub car_service: Arc<CarService>,
    pub rental_service: Arc<RentalService>,
    pub token_service: Arc<TokenService>,
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.token_service.clone()
    }
}
