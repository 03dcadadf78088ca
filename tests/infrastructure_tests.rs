//! Infrastructure layer unit tests
//!
//! Tests for the local file store adapter.

use garble::domain::repositories::{FileStore, FileStoreError};
use garble::infrastructure::persistence::LocalFileStore;
use rstest::*;
use std::fs;
use tempfile::TempDir;

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

#[rstest]
fn test_write_then_read(temp_dir: TempDir) {
    let store = LocalFileStore::new();
    let path = temp_dir.path().join("blob.bin");
    let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

    store.write(&path, &data).unwrap();

    assert_eq!(store.read(&path).unwrap(), data);
    assert_eq!(store.files_written(), 1);
    assert_eq!(store.bytes_written(), 4096);
}

#[rstest]
fn test_write_truncates_existing_file(temp_dir: TempDir) {
    let store = LocalFileStore::new();
    let path = temp_dir.path().join("blob.bin");
    fs::write(&path, vec![7u8; 100]).unwrap();

    store.write(&path, b"short").unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"short");
}

#[rstest]
fn test_read_missing_file_is_not_found(temp_dir: TempDir) {
    let store = LocalFileStore::new();
    let err = store.read(&temp_dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, FileStoreError::NotFound(_)));
}

#[rstest]
fn test_write_into_missing_directory_fails(temp_dir: TempDir) {
    let store = LocalFileStore::new();
    let path = temp_dir.path().join("nope").join("blob.bin");

    assert!(store.write(&path, b"data").is_err());
    assert_eq!(store.files_written(), 0);
}

#[rstest]
fn test_create_dir_all_nested(temp_dir: TempDir) {
    let store = LocalFileStore::new();
    let nested = temp_dir.path().join("a").join("b").join("c");

    store.create_dir_all(&nested).unwrap();
    // Existing directories are fine
    store.create_dir_all(&nested).unwrap();

    assert!(store.is_dir(&nested));
}

#[rstest]
fn test_create_dir_over_file_fails(temp_dir: TempDir) {
    let store = LocalFileStore::new();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, b"x").unwrap();

    assert!(store.create_dir_all(&blocker).is_err());
    assert!(!store.is_dir(&blocker));
}

#[rstest]
fn test_empty_file(temp_dir: TempDir) {
    let store = LocalFileStore::new();
    let path = temp_dir.path().join("empty");

    store.write(&path, &[]).unwrap();

    assert!(store.read(&path).unwrap().is_empty());
    assert_eq!(store.bytes_written(), 0);
}
