pub mod get;
pub mod status;
pub mod update;

pub use get::get_dns_config;
pub use status::get_dns_status;
pub use update::apply_dns_config;
