use async_trait::async_trait;
use netpanel_domain::DomainError;
use std::path::{Path, PathBuf};

/// Record of one completed artifact write, enough to undo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    /// Copy of the previous content, `None` when the artifact did not exist.
    pub backup: Option<PathBuf>,
}

/// Persistence for generated configuration artifacts.
///
/// Implementations keep exactly one previous generation per artifact as a
/// `.bak` sibling.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Whether a file or directory exists at `path`.
    async fn exists(&self, path: &Path) -> bool;

    /// Verify that new files can be created inside `dir`.
    ///
    /// # Errors
    ///
    /// * `DomainError::PermissionDenied` - If the directory is not writable
    /// * `DomainError::IoError` - If the probe fails for another reason
    async fn probe_writable(&self, dir: &Path) -> Result<(), DomainError>;

    /// Create `dir` and its parents if needed.
    async fn ensure_dir(&self, dir: &Path) -> Result<(), DomainError>;

    /// Back up the current content of `path` (if any) to `path.bak`, then
    /// replace it with `content`.
    ///
    /// A failed call leaves `path` untouched.
    async fn write_with_backup(&self, path: &Path, content: &str)
        -> Result<WriteOutcome, DomainError>;

    /// Undo a write: restore the backup, or remove the artifact if it was new.
    async fn restore(&self, outcome: &WriteOutcome) -> Result<(), DomainError>;
}
