//! Configuration module for Netpanel
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Web server binding
//! - `bind`: Resolver paths, external commands and rollback policy
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod bind;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use bind::{BindSettings, RollbackPolicy};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
