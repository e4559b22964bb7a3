use netpanel_domain::ApplyError;
use serde::{Deserialize, Serialize};

/// Error body shared by every DNS endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Output of the external checker or reload command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolled_back: Option<bool>,
    /// Whether artifacts on disk may have changed.
    pub disk_state_changed: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: message.into(),
            details: Vec::new(),
            path: None,
            output: None,
            rolled_back: None,
            disk_state_changed: false,
        }
    }
}

impl From<ApplyError> for ErrorResponse {
    fn from(err: ApplyError) -> Self {
        let mut body = ErrorResponse::new(err.kind(), err.to_string());
        body.disk_state_changed = err.disk_state_changed();

        match err {
            ApplyError::Validation(errors) => body.details = errors,
            ApplyError::Permission { path, .. } => body.path = Some(path.display().to_string()),
            ApplyError::Write {
                path, rolled_back, ..
            } => {
                body.path = Some(path.display().to_string());
                body.rolled_back = Some(rolled_back);
            }
            ApplyError::CheckFailed {
                artifact,
                output,
                rolled_back,
            } => {
                body.path = Some(artifact);
                body.output = Some(output);
                body.rolled_back = Some(rolled_back);
            }
            ApplyError::ReloadFailed { output } => body.output = Some(output),
            ApplyError::Internal(_) => {}
        }

        body
    }
}
