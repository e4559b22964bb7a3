pub mod config;

pub use config::{
    ApplyDnsConfigUseCase, ApplyOutcome, CurrentConfiguration, GetDnsConfigUseCase,
    GetServiceStatusUseCase, ServiceStatus,
};
