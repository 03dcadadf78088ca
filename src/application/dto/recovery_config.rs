//! Recovery config DTO

use super::corruption_config::DEFAULT_HEADER_SIZE;
use crate::core::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options for a recovery run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    /// Write the repaired bytes over the source file
    pub replace_original: bool,
    /// Directory receiving `<basename>` when not replacing
    pub destination_dir: Option<PathBuf>,
    /// Number of leading bytes the unflip and patch rules consider
    pub header_size: usize,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            replace_original: false,
            destination_dir: None,
            header_size: DEFAULT_HEADER_SIZE,
        }
    }
}

impl RecoveryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the source file on success
    pub fn replace_original(mut self, replace: bool) -> Self {
        self.replace_original = replace;
        self
    }

    /// Sets the output directory
    pub fn with_destination(mut self, dir: impl Into<PathBuf>) -> Self {
        self.destination_dir = Some(dir.into());
        self
    }

    /// Sets the header size
    pub fn with_header_size(mut self, header_size: usize) -> Self {
        self.header_size = header_size;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.header_size == 0 {
            return Err(ConfigError::ZeroHeaderSize);
        }
        Ok(())
    }
}
