use crate::ports::ServiceBackends;
use netpanel_domain::{DomainError, ExecutionMode};
use tracing::instrument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceStatus {
    pub running: bool,
    pub mode: ExecutionMode,
}

pub struct GetServiceStatusUseCase {
    backends: ServiceBackends,
    mode: ExecutionMode,
}

impl GetServiceStatusUseCase {
    /// `backends` must match `mode`; simulated backends never spawn processes.
    pub fn new(backends: ServiceBackends, mode: ExecutionMode) -> Self {
        Self { backends, mode }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<ServiceStatus, DomainError> {
        let running = self.backends.controller.is_running().await?;
        Ok(ServiceStatus {
            running,
            mode: self.mode,
        })
    }
}
