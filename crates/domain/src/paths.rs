use crate::config::BindSettings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const SANDBOX_ZONES_DIR: &str = "zones";
pub const SANDBOX_OPTIONS_FILE: &str = "named.conf.options";
pub const SANDBOX_ZONE_INCLUDE_FILE: &str = "named.conf.local";

/// Whether side effects hit the real system or a project-local sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Production,
    /// Writes go to the sandbox; checker and reload commands are only logged.
    #[serde(alias = "development")]
    Simulation,
}

impl ExecutionMode {
    pub fn is_simulation(&self) -> bool {
        matches!(self, ExecutionMode::Simulation)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Production => "production",
            ExecutionMode::Simulation => "simulation",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Ok(ExecutionMode::Production),
            "simulation" | "development" | "dev" => Ok(ExecutionMode::Simulation),
            _ => Err(format!("Invalid execution mode: {}", s)),
        }
    }
}

/// Filesystem targets for one configuration operation.
///
/// Resolved once per request and passed by value to every step, so a sandbox
/// fallback never outlives the request that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub mode: ExecutionMode,
    pub zones_dir: PathBuf,
    pub options_file: PathBuf,
    pub zone_include_file: PathBuf,
    /// Set when production paths were unusable and the sandbox was substituted.
    pub fell_back: bool,
}

impl ResolvedPaths {
    pub fn resolve(mode: ExecutionMode, settings: &BindSettings) -> Self {
        match mode {
            ExecutionMode::Production => Self {
                mode,
                zones_dir: settings.zones_dir.clone(),
                options_file: settings.options_file.clone(),
                zone_include_file: settings.zone_include_file.clone(),
                fell_back: false,
            },
            ExecutionMode::Simulation => Self::sandbox(&settings.sandbox_dir),
        }
    }

    pub fn sandbox(sandbox_dir: &Path) -> Self {
        Self {
            mode: ExecutionMode::Simulation,
            zones_dir: sandbox_dir.join(SANDBOX_ZONES_DIR),
            options_file: sandbox_dir.join(SANDBOX_OPTIONS_FILE),
            zone_include_file: sandbox_dir.join(SANDBOX_ZONE_INCLUDE_FILE),
            fell_back: false,
        }
    }

    /// One-shot override used when production paths are missing.
    pub fn sandbox_fallback(sandbox_dir: &Path) -> Self {
        Self {
            fell_back: true,
            ..Self::sandbox(sandbox_dir)
        }
    }

    pub fn zone_file(&self, file_name: &str) -> PathBuf {
        self.zones_dir.join(file_name.trim())
    }

    /// Directory holding the options file.
    pub fn options_dir(&self) -> &Path {
        self.options_file.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn include_dir(&self) -> &Path {
        self.zone_include_file
            .parent()
            .unwrap_or_else(|| Path::new("."))
    }

    /// Directories that must exist before any artifact is written.
    pub fn required_dirs(&self) -> Vec<PathBuf> {
        let mut dirs = vec![self.zones_dir.clone()];
        for dir in [self.options_dir(), self.include_dir()] {
            if !dir.as_os_str().is_empty() && !dirs.iter().any(|d| d == dir) {
                dirs.push(dir.to_path_buf());
            }
        }
        dirs
    }

    /// How a zone stanza refers to its file: absolute in the sandbox, bare
    /// (relative to the `directory` option) in production.
    pub fn zone_file_reference(&self, file_name: &str) -> String {
        match self.mode {
            ExecutionMode::Simulation => self.zone_file(file_name).display().to_string(),
            ExecutionMode::Production => file_name.trim().to_string(),
        }
    }
}
