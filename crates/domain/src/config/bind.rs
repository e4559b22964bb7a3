use crate::paths::ExecutionMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to restore when an apply fails after artifacts were touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RollbackPolicy {
    /// Leave whatever was written in place.
    None,
    /// Restore this call's backups when a write fails partway.
    #[default]
    OnWriteFailure,
    /// Also restore when the configuration checker rejects the new artifacts.
    OnAnyFailure,
}

impl RollbackPolicy {
    pub fn on_write_failure(&self) -> bool {
        !matches!(self, RollbackPolicy::None)
    }

    pub fn on_check_failure(&self) -> bool {
        matches!(self, RollbackPolicy::OnAnyFailure)
    }
}

/// Resolver integration settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BindSettings {
    #[serde(default)]
    pub mode: ExecutionMode,

    /// Resolver working directory holding the zone files
    #[serde(default = "default_zones_dir")]
    pub zones_dir: PathBuf,

    #[serde(default = "default_options_file")]
    pub options_file: PathBuf,

    /// File with one `zone` stanza per configured zone
    #[serde(default = "default_zone_include_file")]
    pub zone_include_file: PathBuf,

    /// Project-local directory used in simulation mode and as fallback
    #[serde(default = "default_sandbox_dir")]
    pub sandbox_dir: PathBuf,

    #[serde(default = "default_checkconf_command")]
    pub checkconf_command: String,

    #[serde(default = "default_checkzone_command")]
    pub checkzone_command: String,

    #[serde(default = "default_reload_command")]
    pub reload_command: Vec<String>,

    #[serde(default = "default_status_command")]
    pub status_command: Vec<String>,

    #[serde(default)]
    pub rollback_policy: RollbackPolicy,
}

impl Default for BindSettings {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Production,
            zones_dir: default_zones_dir(),
            options_file: default_options_file(),
            zone_include_file: default_zone_include_file(),
            sandbox_dir: default_sandbox_dir(),
            checkconf_command: default_checkconf_command(),
            checkzone_command: default_checkzone_command(),
            reload_command: default_reload_command(),
            status_command: default_status_command(),
            rollback_policy: RollbackPolicy::default(),
        }
    }
}

fn default_zones_dir() -> PathBuf {
    PathBuf::from("/var/named")
}

fn default_options_file() -> PathBuf {
    PathBuf::from("/etc/named.conf.options")
}

fn default_zone_include_file() -> PathBuf {
    PathBuf::from("/etc/named.conf.local")
}

fn default_sandbox_dir() -> PathBuf {
    PathBuf::from("./sandbox/bind")
}

fn default_checkconf_command() -> String {
    "named-checkconf".to_string()
}

fn default_checkzone_command() -> String {
    "named-checkzone".to_string()
}

fn default_reload_command() -> Vec<String> {
    vec!["rndc".to_string(), "reload".to_string()]
}

fn default_status_command() -> Vec<String> {
    vec![
        "systemctl".to_string(),
        "is-active".to_string(),
        "named".to_string(),
    ]
}
