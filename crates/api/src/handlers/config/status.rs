use crate::dto::{ErrorResponse, ServiceStatusResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::error;

pub async fn get_dns_status(
    State(state): State<AppState>,
) -> Result<Json<ServiceStatusResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .get_status
        .execute()
        .await
        .map(|status| Json(status.into()))
        .map_err(|e| {
            error!(error = %e, "Failed to probe resolver status");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("internal_error", e.to_string())),
            )
        })
}
