use netpanel_application::use_cases::{ApplyOutcome, CurrentConfiguration, ServiceStatus};
use netpanel_domain::DnsConfiguration;
use serde::{Deserialize, Serialize};

/// Response DTO for a successful configuration update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyConfigResponse {
    pub success: bool,
    pub message: String,
    pub applied_configuration: DnsConfiguration,
    /// Records skipped while rendering.
    pub warnings: Vec<String>,
    pub reloaded: bool,
    pub mode: String,
    /// The production layout was missing and the sandbox was used instead.
    pub fell_back: bool,
    pub artifacts: Vec<String>,
}

impl From<ApplyOutcome> for ApplyConfigResponse {
    fn from(outcome: ApplyOutcome) -> Self {
        let message = match (outcome.paths.mode.is_simulation(), outcome.reloaded) {
            (true, _) => "DNS configuration written to the sandbox (simulation mode)",
            (false, true) => "DNS configuration applied and service reloaded",
            (false, false) => "DNS configuration saved; service is disabled, no reload performed",
        };

        Self {
            success: true,
            message: message.to_string(),
            applied_configuration: outcome.applied,
            warnings: outcome.warnings,
            reloaded: outcome.reloaded,
            mode: outcome.paths.mode.to_string(),
            fell_back: outcome.paths.fell_back,
            artifacts: outcome
                .artifacts
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConfigResponse {
    #[serde(flatten)]
    pub configuration: DnsConfiguration,
    pub is_default: bool,
}

impl From<CurrentConfiguration> for CurrentConfigResponse {
    fn from(current: CurrentConfiguration) -> Self {
        Self {
            configuration: current.configuration,
            is_default: current.is_default,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatusResponse {
    pub running: bool,
    pub mode: String,
}

impl From<ServiceStatus> for ServiceStatusResponse {
    fn from(status: ServiceStatus) -> Self {
        Self {
            running: status.running,
            mode: status.mode.to_string(),
        }
    }
}
