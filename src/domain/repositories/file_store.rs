//! File store trait
//!
//! Defines the interface the engines use to read source files, write
//! corrupted or recovered output and create output directories.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when touching the file system
#[derive(Error, Debug)]
pub enum FileStoreError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage full: {0}")]
    StorageFull(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl FileStoreError {
    /// Classifies an `io::Error` raised while operating on `path`
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let display = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => FileStoreError::NotFound(display),
            io::ErrorKind::PermissionDenied => FileStoreError::PermissionDenied(display),
            io::ErrorKind::StorageFull => FileStoreError::StorageFull(display),
            _ => FileStoreError::Io {
                path: display,
                source: err,
            },
        }
    }
}

/// Trait for the file system surface of the engines
///
/// Implementations must be `Send + Sync` so a single store can be shared by
/// every worker of a batch.
///
/// # Example
///
/// ```ignore
/// let store = LocalFileStore::new();
/// let bytes = store.read(Path::new("photo.png"))?;
/// store.write(Path::new("corrupted_photo.png"), &bytes)?;
/// ```
pub trait FileStore: Send + Sync {
    /// Reads the whole file
    fn read(&self, path: &Path) -> Result<Vec<u8>, FileStoreError>;

    /// Writes `data` to `path`, replacing any existing file
    fn write(&self, path: &Path, data: &[u8]) -> Result<(), FileStoreError>;

    /// Creates `path` and all missing parents
    fn create_dir_all(&self, path: &Path) -> Result<(), FileStoreError>;

    /// Returns whether `path` is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns the number of files written so far
    fn files_written(&self) -> usize;

    /// Returns the total bytes written so far
    fn bytes_written(&self) -> u64;
}
