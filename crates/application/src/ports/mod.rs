pub mod artifact_store;
pub mod config_checker;
pub mod service_controller;

pub use artifact_store::{ArtifactStore, WriteOutcome};
pub use config_checker::ConfigChecker;
pub use service_controller::ServiceController;

use std::sync::Arc;

/// Checker and service controller used for one execution mode.
#[derive(Clone)]
pub struct ServiceBackends {
    pub checker: Arc<dyn ConfigChecker>,
    pub controller: Arc<dyn ServiceController>,
}

impl ServiceBackends {
    pub fn new(checker: Arc<dyn ConfigChecker>, controller: Arc<dyn ServiceController>) -> Self {
        Self {
            checker,
            controller,
        }
    }
}
