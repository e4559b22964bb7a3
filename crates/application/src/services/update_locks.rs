use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-target serialization of configuration updates.
///
/// Two applies aimed at the same zone directory run one after the other;
/// applies against different targets do not block each other.
#[derive(Default)]
pub struct UpdateLocks {
    locks: DashMap<PathBuf, Arc<Mutex<()>>>,
}

impl UpdateLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, target: &Path) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(target.to_path_buf())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
