use crate::dto::{ApplyConfigResponse, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use netpanel_domain::{ApplyError, DnsConfiguration};
use tracing::{error, info, warn};

pub async fn apply_dns_config(
    State(state): State<AppState>,
    Json(config): Json<DnsConfiguration>,
) -> Result<Json<ApplyConfigResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.apply_config.execute(config).await {
        Ok(outcome) => {
            info!(
                mode = %outcome.paths.mode,
                warnings = outcome.warnings.len(),
                reloaded = outcome.reloaded,
                "DNS configuration update accepted"
            );
            Ok(Json(ApplyConfigResponse::from(outcome)))
        }
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                error!(kind = e.kind(), error = %e, "DNS configuration update failed");
            } else {
                warn!(kind = e.kind(), error = %e, "DNS configuration update rejected");
            }
            Err((status, Json(ErrorResponse::from(e))))
        }
    }
}

fn status_for(err: &ApplyError) -> StatusCode {
    match err {
        ApplyError::Validation(_) => StatusCode::BAD_REQUEST,
        ApplyError::Permission { .. } => StatusCode::FORBIDDEN,
        ApplyError::CheckFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ApplyError::ReloadFailed { .. } => StatusCode::BAD_GATEWAY,
        ApplyError::Write { .. } | ApplyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
