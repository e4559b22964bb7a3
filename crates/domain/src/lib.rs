//! Netpanel Domain Layer
pub mod config;
pub mod dns_configuration;
pub mod dns_record;
pub mod errors;
pub mod paths;
pub mod validators;
pub mod zone;

pub use config::{BindSettings, CliOverrides, Config, ConfigError, RollbackPolicy};
pub use dns_configuration::DnsConfiguration;
pub use dns_record::{DnsRecord, RecordDiagnostic, RecordKind, RecordType};
pub use errors::{ApplyError, DomainError, ReadConfigError};
pub use paths::{ExecutionMode, ResolvedPaths};
pub use zone::{SoaSettings, Zone, ZoneType};
