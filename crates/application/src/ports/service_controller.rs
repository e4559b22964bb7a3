use async_trait::async_trait;
use netpanel_domain::DomainError;

/// Control over the running resolver process.
#[async_trait]
pub trait ServiceController: Send + Sync {
    /// Ask the running resolver to re-read its configuration.
    async fn reload(&self) -> Result<(), DomainError>;

    /// Whether the resolver process is currently active.
    async fn is_running(&self) -> Result<bool, DomainError>;
}
