use crate::domain::repositories::FileStoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while processing a single file or directory
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] FileStoreError),

    #[error("Unknown corruption pattern: no repair rule applies to {0}")]
    UnknownPattern(PathBuf),

    #[error("Type mismatch: expected {expected}, candidate classifies as {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Could not create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: FileStoreError,
    },
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Io(_) => ErrorKind::Io,
            EngineError::UnknownPattern(_) => ErrorKind::UnknownPattern,
            EngineError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            EngineError::DirectoryCreate { .. } => ErrorKind::DirectoryCreate,
        }
    }
}

/// Serializable tag of an [`EngineError`], stored on failed jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Io,
    UnknownPattern,
    TypeMismatch,
    DirectoryCreate,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Io => "io error",
            ErrorKind::UnknownPattern => "unknown corruption pattern",
            ErrorKind::TypeMismatch => "type mismatch",
            ErrorKind::DirectoryCreate => "directory create error",
        };
        f.write_str(name)
    }
}

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Header size must be greater than zero")]
    ZeroHeaderSize,
}

pub type Result<T> = std::result::Result<T, EngineError>;
