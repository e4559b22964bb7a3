pub mod config;
pub mod health;

pub use config::{apply_dns_config, get_dns_config, get_dns_status};
pub use health::health_check;
