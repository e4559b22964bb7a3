use async_trait::async_trait;
use netpanel_domain::DomainError;
use std::path::Path;

/// External syntax checker for generated artifacts.
#[async_trait]
pub trait ConfigChecker: Send + Sync {
    /// Check a configuration file (options or zone inclusions).
    async fn check_config(&self, path: &Path) -> Result<(), DomainError>;

    /// Check one zone file against its zone name.
    async fn check_zone(&self, zone_name: &str, path: &Path) -> Result<(), DomainError>;
}
