use crate::dto::{CurrentConfigResponse, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use netpanel_domain::ReadConfigError;
use tracing::{debug, error};

pub async fn get_dns_config(
    State(state): State<AppState>,
) -> Result<Json<CurrentConfigResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.get_config.execute().await {
        Ok(current) => {
            debug!(
                is_default = current.is_default,
                server_running = current.server_running,
                "DNS configuration retrieved"
            );
            Ok(Json(CurrentConfigResponse::from(current)))
        }
        Err(e @ ReadConfigError::NotImplemented) => Err((
            StatusCode::NOT_IMPLEMENTED,
            Json(ErrorResponse::new("not_implemented", e.to_string())),
        )),
        Err(e) => {
            error!(error = %e, "Failed to read DNS configuration");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("internal_error", e.to_string())),
            ))
        }
    }
}
