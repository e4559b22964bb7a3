use netpanel_application::ports::ArtifactStore;
use netpanel_infrastructure::bind::artifact_store::backup_path;
use netpanel_infrastructure::FsArtifactStore;
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_write_new_file_has_no_backup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.example.com");
    let store = FsArtifactStore::new();

    let outcome = store.write_with_backup(&path, "first\n").await.unwrap();

    assert_eq!(outcome.backup, None);
    assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");
    assert!(!backup_path(&path).exists());
}

#[tokio::test]
async fn test_overwrite_keeps_one_previous_generation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("named.conf.options");
    let store = FsArtifactStore::new();

    store.write_with_backup(&path, "v1").await.unwrap();
    store.write_with_backup(&path, "v2").await.unwrap();
    let outcome = store.write_with_backup(&path, "v3").await.unwrap();

    assert_eq!(outcome.backup, Some(backup_path(&path)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "v3");
    assert_eq!(fs::read_to_string(backup_path(&path)).unwrap(), "v2");
}

#[tokio::test]
async fn test_backup_path_appends_suffix() {
    let path = std::path::Path::new("/etc/named.conf.local");
    assert_eq!(
        backup_path(path),
        std::path::PathBuf::from("/etc/named.conf.local.bak")
    );
}

#[tokio::test]
async fn test_restore_brings_back_previous_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("named.conf.local");
    let store = FsArtifactStore::new();
    store.write_with_backup(&path, "old").await.unwrap();

    let outcome = store.write_with_backup(&path, "new").await.unwrap();
    store.restore(&outcome).await.unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "old");
}

#[tokio::test]
async fn test_restore_removes_file_that_did_not_exist() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.new");
    let store = FsArtifactStore::new();

    let outcome = store.write_with_backup(&path, "zone").await.unwrap();
    store.restore(&outcome).await.unwrap();
    assert!(!path.exists());

    // Restoring twice is harmless.
    store.restore(&outcome).await.unwrap();
}

#[tokio::test]
async fn test_write_into_missing_directory_fails_without_side_effects() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("db.example.com");
    let store = FsArtifactStore::new();

    assert!(store.write_with_backup(&path, "zone").await.is_err());
    assert!(!dir.path().join("missing").exists());
}

#[tokio::test]
async fn test_ensure_dir_creates_nested_directories() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("sandbox").join("bind").join("zones");
    let store = FsArtifactStore::new();

    store.ensure_dir(&nested).await.unwrap();
    store.ensure_dir(&nested).await.unwrap();

    assert!(nested.is_dir());
    assert!(store.exists(&nested).await);
}

#[tokio::test]
async fn test_probe_writable_leaves_no_trace() {
    let dir = TempDir::new().unwrap();
    let store = FsArtifactStore::new();

    store.probe_writable(dir.path()).await.unwrap();

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_probe_writable_fails_for_missing_directory() {
    let dir = TempDir::new().unwrap();
    let store = FsArtifactStore::new();

    assert!(store
        .probe_writable(&dir.path().join("does-not-exist"))
        .await
        .is_err());
}
