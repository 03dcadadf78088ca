//! Local file store implementation
//!
//! Reads and writes plain files on the local filesystem.

use crate::domain::repositories::{FileStore, FileStoreError};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Local file system store
///
/// Writes truncate any existing file and are synced before returning.
#[derive(Debug, Default)]
pub struct LocalFileStore {
    files_written: AtomicUsize,
    bytes_written: AtomicU64,
}

impl LocalFileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileStore for LocalFileStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>, FileStoreError> {
        fs::read(path).map_err(|e| FileStoreError::from_io(path, e))
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<(), FileStoreError> {
        let mut output_file = File::create(path).map_err(|e| FileStoreError::from_io(path, e))?;
        output_file
            .write_all(data)
            .map_err(|e| FileStoreError::from_io(path, e))?;
        output_file
            .sync_all()
            .map_err(|e| FileStoreError::from_io(path, e))?;

        self.files_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written
            .fetch_add(data.len() as u64, Ordering::Relaxed);

        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FileStoreError> {
        fs::create_dir_all(path).map_err(|e| FileStoreError::from_io(path, e))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn files_written(&self) -> usize {
        self.files_written.load(Ordering::Relaxed)
    }

    fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }
}
