use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by ports (filesystem, external commands).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("I/O error on {path}: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("Permission denied on {path}: {message}")]
    PermissionDenied { path: PathBuf, message: String },

    #[error("Failed to run '{command}': {message}")]
    CommandSpawn { command: String, message: String },

    #[error("'{command}' exited with status {status}: {output}")]
    CommandFailed {
        command: String,
        status: i32,
        output: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl DomainError {
    pub fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            DomainError::PermissionDenied {
                path,
                message: err.to_string(),
            }
        } else {
            DomainError::IoError {
                path,
                message: err.to_string(),
            }
        }
    }

    /// Captured command output, when the error came from an external process.
    pub fn command_output(&self) -> Option<&str> {
        match self {
            DomainError::CommandFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}

/// Outcome taxonomy of applying a configuration.
///
/// Each variant states whether on-disk state changed so the operator knows
/// what to do next.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// Malformed input; nothing was touched.
    #[error("Configuration rejected: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Production paths are not writable; nothing was touched.
    #[error("Permission denied on {path}: {reason}")]
    Permission { path: PathBuf, reason: String },

    /// A write failed partway; earlier artifacts may have been updated.
    #[error("Failed to write {path}: {reason} (rolled back: {rolled_back})")]
    Write {
        path: PathBuf,
        reason: String,
        rolled_back: bool,
    },

    /// The configuration checker rejected a generated artifact.
    #[error("Configuration check failed for {artifact}: {output} (rolled back: {rolled_back})")]
    CheckFailed {
        artifact: String,
        output: String,
        rolled_back: bool,
    },

    /// Artifacts are persisted but the running service did not pick them up.
    #[error("Configuration persisted, reload failed: {output}")]
    ReloadFailed { output: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplyError {
    /// Short machine-readable kind used by the API layer.
    pub fn kind(&self) -> &'static str {
        match self {
            ApplyError::Validation(_) => "validation_error",
            ApplyError::Permission { .. } => "permission_error",
            ApplyError::Write { .. } => "write_error",
            ApplyError::CheckFailed { .. } => "validation_failure",
            ApplyError::ReloadFailed { .. } => "reload_failure",
            ApplyError::Internal(_) => "internal_error",
        }
    }

    /// Whether artifacts on disk may differ from what was there before the call.
    pub fn disk_state_changed(&self) -> bool {
        match self {
            ApplyError::Validation(_) | ApplyError::Permission { .. } | ApplyError::Internal(_) => {
                false
            }
            ApplyError::Write { rolled_back, .. } | ApplyError::CheckFailed { rolled_back, .. } => {
                !rolled_back
            }
            ApplyError::ReloadFailed { .. } => true,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadConfigError {
    /// Both configuration files exist; reading BIND syntax back is unsupported.
    #[error("Reading existing BIND configuration is not implemented")]
    NotImplemented,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for ReadConfigError {
    fn from(err: DomainError) -> Self {
        ReadConfigError::Internal(err.to_string())
    }
}
