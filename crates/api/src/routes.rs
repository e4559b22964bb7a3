use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state. Mounted under `/api` by the binary.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/dns/config", get(handlers::get_dns_config))
        .route("/dns/config", post(handlers::apply_dns_config))
        .route("/dns/status", get(handlers::get_dns_status))
        .with_state(state)
}
