//! Repository traits (interfaces)
//!
//! These traits define the contracts for external dependencies.

mod file_store;

pub use file_store::{FileStore, FileStoreError};
