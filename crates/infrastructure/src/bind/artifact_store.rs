use async_trait::async_trait;
use netpanel_application::ports::{ArtifactStore, WriteOutcome};
use netpanel_domain::DomainError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

const BACKUP_SUFFIX: &str = ".bak";
const TMP_SUFFIX: &str = ".tmp";
const PROBE_FILE: &str = ".netpanel-write-probe";

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Backup sibling of an artifact (`named.conf.local` -> `named.conf.local.bak`).
pub fn backup_path(path: &Path) -> PathBuf {
    with_suffix(path, BACKUP_SUFFIX)
}

/// Local filesystem store for generated artifacts.
///
/// New content is written to a temporary sibling and renamed into place, so a
/// failed write never leaves a truncated artifact behind.
#[derive(Debug, Clone, Default)]
pub struct FsArtifactStore;

impl FsArtifactStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ArtifactStore for FsArtifactStore {
    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn probe_writable(&self, dir: &Path) -> Result<(), DomainError> {
        let probe = dir.join(format!("{}-{}", PROBE_FILE, std::process::id()));
        fs::write(&probe, b"").await.map_err(|e| {
            warn!(path = %dir.display(), error = %e, "Write probe failed");
            DomainError::io(dir, &e)
        })?;

        if let Err(e) = fs::remove_file(&probe).await {
            warn!(path = %probe.display(), error = %e, "Failed to remove write probe");
        }

        debug!(path = %dir.display(), "Directory is writable");
        Ok(())
    }

    async fn ensure_dir(&self, dir: &Path) -> Result<(), DomainError> {
        if fs::try_exists(dir).await.unwrap_or(false) {
            return Ok(());
        }
        fs::create_dir_all(dir)
            .await
            .map_err(|e| DomainError::io(dir, &e))?;
        info!(path = %dir.display(), "Created directory");
        Ok(())
    }

    async fn write_with_backup(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<WriteOutcome, DomainError> {
        let backup = if fs::try_exists(path).await.unwrap_or(false) {
            let bak = backup_path(path);
            fs::copy(path, &bak)
                .await
                .map_err(|e| DomainError::io(&bak, &e))?;
            debug!(path = %path.display(), backup = %bak.display(), "Backed up artifact");
            Some(bak)
        } else {
            None
        };

        let tmp = with_suffix(path, TMP_SUFFIX);
        if let Err(e) = fs::write(&tmp, content).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(DomainError::io(path, &e));
        }
        if let Err(e) = fs::rename(&tmp, path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(DomainError::io(path, &e));
        }

        debug!(path = %path.display(), bytes = content.len(), "Wrote artifact");
        Ok(WriteOutcome {
            path: path.to_path_buf(),
            backup,
        })
    }

    async fn restore(&self, outcome: &WriteOutcome) -> Result<(), DomainError> {
        match &outcome.backup {
            Some(bak) => {
                fs::copy(bak, &outcome.path)
                    .await
                    .map_err(|e| DomainError::io(&outcome.path, &e))?;
                info!(path = %outcome.path.display(), "Restored artifact from backup");
            }
            None => match fs::remove_file(&outcome.path).await {
                Ok(()) => info!(path = %outcome.path.display(), "Removed new artifact"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(DomainError::io(&outcome.path, &e)),
            },
        }
        Ok(())
    }
}
