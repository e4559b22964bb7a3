#![allow(dead_code)]

use async_trait::async_trait;
use netpanel_application::ports::{
    ArtifactStore, ConfigChecker, ServiceBackends, ServiceController, WriteOutcome,
};
use netpanel_domain::DomainError;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock ArtifactStore
// ============================================================================

#[derive(Clone, Default)]
pub struct MockArtifactStore {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
    dirs: Arc<RwLock<HashSet<PathBuf>>>,
    fail_writes: Arc<RwLock<HashSet<PathBuf>>>,
    read_only_dirs: Arc<RwLock<HashSet<PathBuf>>>,
    writes: Arc<RwLock<Vec<PathBuf>>>,
}

impl MockArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark directories as present on the "disk".
    pub async fn with_dirs(self, dirs: &[&str]) -> Self {
        self.add_dirs(dirs).await;
        self
    }

    pub async fn add_dirs(&self, dirs: &[&str]) {
        let mut set = self.dirs.write().await;
        for d in dirs {
            set.insert(PathBuf::from(d));
        }
    }

    pub async fn put_file(&self, path: &str, content: &str) {
        self.files
            .write()
            .await
            .insert(PathBuf::from(path), content.to_string());
    }

    pub async fn fail_write_of(&self, path: &str) {
        self.fail_writes.write().await.insert(PathBuf::from(path));
    }

    pub async fn make_read_only(&self, dir: &str) {
        self.read_only_dirs.write().await.insert(PathBuf::from(dir));
    }

    pub async fn file(&self, path: &str) -> Option<String> {
        self.files.read().await.get(Path::new(path)).cloned()
    }

    pub async fn has_dir(&self, path: &str) -> bool {
        self.dirs.read().await.contains(Path::new(path))
    }

    /// Paths passed to `write_with_backup`, including failed attempts.
    pub async fn write_log(&self) -> Vec<PathBuf> {
        self.writes.read().await.clone()
    }

    pub async fn file_count(&self) -> usize {
        self.files.read().await.len()
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

#[async_trait]
impl ArtifactStore for MockArtifactStore {
    async fn exists(&self, path: &Path) -> bool {
        self.dirs.read().await.contains(path) || self.files.read().await.contains_key(path)
    }

    async fn probe_writable(&self, dir: &Path) -> Result<(), DomainError> {
        if !self.dirs.read().await.contains(dir) {
            return Err(DomainError::IoError {
                path: dir.to_path_buf(),
                message: "No such file or directory (os error 2)".to_string(),
            });
        }
        if self.read_only_dirs.read().await.contains(dir) {
            return Err(DomainError::PermissionDenied {
                path: dir.to_path_buf(),
                message: "read-only file system".to_string(),
            });
        }
        Ok(())
    }

    async fn ensure_dir(&self, dir: &Path) -> Result<(), DomainError> {
        self.dirs.write().await.insert(dir.to_path_buf());
        Ok(())
    }

    async fn write_with_backup(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<WriteOutcome, DomainError> {
        self.writes.write().await.push(path.to_path_buf());

        if self.fail_writes.read().await.contains(path) {
            return Err(DomainError::IoError {
                path: path.to_path_buf(),
                message: "No space left on device".to_string(),
            });
        }

        let mut files = self.files.write().await;
        let backup = match files.get(path).cloned() {
            Some(previous) => {
                let bak = backup_path(path);
                files.insert(bak.clone(), previous);
                Some(bak)
            }
            None => None,
        };
        files.insert(path.to_path_buf(), content.to_string());

        Ok(WriteOutcome {
            path: path.to_path_buf(),
            backup,
        })
    }

    async fn restore(&self, outcome: &WriteOutcome) -> Result<(), DomainError> {
        let mut files = self.files.write().await;
        match &outcome.backup {
            Some(bak) => {
                let previous = files.get(bak).cloned().unwrap_or_default();
                files.insert(outcome.path.clone(), previous);
            }
            None => {
                files.remove(&outcome.path);
            }
        }
        Ok(())
    }
}

// ============================================================================
// Mock ConfigChecker
// ============================================================================

#[derive(Clone, Default)]
pub struct MockConfigChecker {
    calls: Arc<RwLock<Vec<String>>>,
    reject: Arc<RwLock<Option<PathBuf>>>,
}

impl MockConfigChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn reject(&self, path: &str) {
        *self.reject.write().await = Some(PathBuf::from(path));
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    async fn check(&self, label: String, path: &Path) -> Result<(), DomainError> {
        self.calls.write().await.push(label);
        if self.reject.read().await.as_deref() == Some(path) {
            return Err(DomainError::CommandFailed {
                command: "named-checkconf".to_string(),
                status: 1,
                output: format!("{}:3: unknown option 'bogus'", path.display()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ConfigChecker for MockConfigChecker {
    async fn check_config(&self, path: &Path) -> Result<(), DomainError> {
        self.check(format!("conf {}", path.display()), path).await
    }

    async fn check_zone(&self, zone_name: &str, path: &Path) -> Result<(), DomainError> {
        self.check(format!("zone {} {}", zone_name, path.display()), path)
            .await
    }
}

// ============================================================================
// Mock ServiceController
// ============================================================================

#[derive(Clone, Default)]
pub struct MockServiceController {
    reloads: Arc<RwLock<u32>>,
    fail_reload: Arc<RwLock<bool>>,
    running: Arc<RwLock<bool>>,
    fail_status: Arc<RwLock<bool>>,
}

impl MockServiceController {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_running(&self, running: bool) {
        *self.running.write().await = running;
    }

    pub async fn set_fail_reload(&self, fail: bool) {
        *self.fail_reload.write().await = fail;
    }

    pub async fn set_fail_status(&self, fail: bool) {
        *self.fail_status.write().await = fail;
    }

    pub async fn reload_count(&self) -> u32 {
        *self.reloads.read().await
    }
}

#[async_trait]
impl ServiceController for MockServiceController {
    async fn reload(&self) -> Result<(), DomainError> {
        *self.reloads.write().await += 1;
        if *self.fail_reload.read().await {
            return Err(DomainError::CommandFailed {
                command: "rndc reload".to_string(),
                status: 1,
                output: "rndc: connect failed: 127.0.0.1#953: connection refused".to_string(),
            });
        }
        Ok(())
    }

    async fn is_running(&self) -> Result<bool, DomainError> {
        if *self.fail_status.read().await {
            return Err(DomainError::CommandSpawn {
                command: "systemctl".to_string(),
                message: "not found".to_string(),
            });
        }
        Ok(*self.running.read().await)
    }
}

// ============================================================================
// Fixture bundle
// ============================================================================

pub struct Backends {
    pub checker: MockConfigChecker,
    pub controller: MockServiceController,
}

impl Backends {
    pub fn new() -> Self {
        Self {
            checker: MockConfigChecker::new(),
            controller: MockServiceController::new(),
        }
    }

    pub fn as_ports(&self) -> ServiceBackends {
        ServiceBackends::new(
            Arc::new(self.checker.clone()),
            Arc::new(self.controller.clone()),
        )
    }
}

// ============================================================================
// Slow ArtifactStore
// ============================================================================

/// Wraps [`MockArtifactStore`], pausing inside every write and recording how
/// many writes were in progress at once.
#[derive(Clone, Default)]
pub struct SlowArtifactStore {
    pub inner: MockArtifactStore,
    in_flight: Arc<RwLock<usize>>,
    max_in_flight: Arc<RwLock<usize>>,
}

impl SlowArtifactStore {
    pub fn new(inner: MockArtifactStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub async fn max_in_flight(&self) -> usize {
        *self.max_in_flight.read().await
    }
}

#[async_trait]
impl ArtifactStore for SlowArtifactStore {
    async fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path).await
    }

    async fn probe_writable(&self, dir: &Path) -> Result<(), DomainError> {
        self.inner.probe_writable(dir).await
    }

    async fn ensure_dir(&self, dir: &Path) -> Result<(), DomainError> {
        self.inner.ensure_dir(dir).await
    }

    async fn write_with_backup(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<WriteOutcome, DomainError> {
        {
            let mut in_flight = self.in_flight.write().await;
            *in_flight += 1;
            let mut max = self.max_in_flight.write().await;
            *max = (*max).max(*in_flight);
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        let result = self.inner.write_with_backup(path, content).await;
        *self.in_flight.write().await -= 1;
        result
    }

    async fn restore(&self, outcome: &WriteOutcome) -> Result<(), DomainError> {
        self.inner.restore(outcome).await
    }
}
