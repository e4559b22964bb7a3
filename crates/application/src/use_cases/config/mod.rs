pub mod get;
pub mod status;
pub mod update;

pub use get::{CurrentConfiguration, GetDnsConfigUseCase};
pub use status::{GetServiceStatusUseCase, ServiceStatus};
pub use update::{ApplyDnsConfigUseCase, ApplyOutcome};
