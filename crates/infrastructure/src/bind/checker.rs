use crate::system::command::{command_line, run_command};
use async_trait::async_trait;
use netpanel_application::ports::ConfigChecker;
use netpanel_domain::DomainError;
use std::path::Path;
use tracing::{debug, info};

/// Runs `named-checkconf <file>` and `named-checkzone <zone> <file>`.
pub struct NamedChecker {
    checkconf: String,
    checkzone: String,
}

impl NamedChecker {
    pub fn new(checkconf: impl Into<String>, checkzone: impl Into<String>) -> Self {
        Self {
            checkconf: checkconf.into(),
            checkzone: checkzone.into(),
        }
    }
}

impl Default for NamedChecker {
    fn default() -> Self {
        Self::new("named-checkconf", "named-checkzone")
    }
}

#[async_trait]
impl ConfigChecker for NamedChecker {
    async fn check_config(&self, path: &Path) -> Result<(), DomainError> {
        let args = vec![path.display().to_string()];
        run_command(&self.checkconf, &args).await?;
        debug!(path = %path.display(), "Configuration file passed check");
        Ok(())
    }

    async fn check_zone(&self, zone_name: &str, path: &Path) -> Result<(), DomainError> {
        let args = vec![zone_name.to_string(), path.display().to_string()];
        let output = run_command(&self.checkzone, &args).await?;
        debug!(zone = %zone_name, output = %output, "Zone file passed check");
        Ok(())
    }
}

/// Logs the checks a real checker would run; always succeeds.
pub struct SimulatedChecker {
    checkconf: String,
    checkzone: String,
}

impl SimulatedChecker {
    pub fn new(checkconf: impl Into<String>, checkzone: impl Into<String>) -> Self {
        Self {
            checkconf: checkconf.into(),
            checkzone: checkzone.into(),
        }
    }
}

#[async_trait]
impl ConfigChecker for SimulatedChecker {
    async fn check_config(&self, path: &Path) -> Result<(), DomainError> {
        let args = vec![path.display().to_string()];
        info!(
            command = %command_line(&self.checkconf, &args),
            "[simulation] would check configuration"
        );
        Ok(())
    }

    async fn check_zone(&self, zone_name: &str, path: &Path) -> Result<(), DomainError> {
        let args = vec![zone_name.to_string(), path.display().to_string()];
        info!(
            command = %command_line(&self.checkzone, &args),
            "[simulation] would check zone"
        );
        Ok(())
    }
}
