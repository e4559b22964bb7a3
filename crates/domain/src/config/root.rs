use super::{BindSettings, ConfigError, LoggingConfig, ServerConfig};
use crate::paths::ExecutionMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub bind: BindSettings,
}

/// Values from the command line that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub mode: Option<ExecutionMode>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file (if given) and apply CLI overrides.
    ///
    /// A missing explicit path is an error; with no path, defaults are used.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(Path::new(p))?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(mode) = overrides.mode {
            self.bind.mode = mode;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation(
                "server.web_port cannot be 0".to_string(),
            ));
        }

        let bind = &self.bind;
        if bind.reload_command.is_empty() {
            return Err(ConfigError::Validation(
                "bind.reload_command cannot be empty".to_string(),
            ));
        }
        if bind.status_command.is_empty() {
            return Err(ConfigError::Validation(
                "bind.status_command cannot be empty".to_string(),
            ));
        }
        if bind.checkconf_command.trim().is_empty() || bind.checkzone_command.trim().is_empty() {
            return Err(ConfigError::Validation(
                "bind checker commands cannot be empty".to_string(),
            ));
        }
        if bind.sandbox_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "bind.sandbox_dir cannot be empty".to_string(),
            ));
        }
        if bind.options_file.file_name().is_none() || bind.zone_include_file.file_name().is_none()
        {
            return Err(ConfigError::Validation(
                "bind.options_file and bind.zone_include_file must name files".to_string(),
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                other
            ))),
        }
    }
}
