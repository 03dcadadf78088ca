//! Crate-wide error types

pub mod error;

pub use error::{ConfigError, EngineError, ErrorKind, Result};
