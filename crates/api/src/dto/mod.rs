pub mod dns_config;
pub mod error;

pub use dns_config::{ApplyConfigResponse, CurrentConfigResponse, ServiceStatusResponse};
pub use error::ErrorResponse;
