//! Corruption config DTO

use crate::core::ConfigError;
use crate::domain::entities::CorruptionMethod;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_HEADER_SIZE: usize = 256;

/// Options for a corruption run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorruptionConfig {
    /// Transform to apply
    pub method: CorruptionMethod,
    /// Number of leading bytes the header transforms touch
    pub header_size: usize,
    /// Write output to `destination_dir` (or the user directory) instead of
    /// next to the source
    pub keep_original: bool,
    /// Output directory used when `keep_original` is set
    pub destination_dir: Option<PathBuf>,
    /// Seed for the randomized methods; `None` uses OS entropy
    pub seed: Option<u64>,
}

impl Default for CorruptionConfig {
    fn default() -> Self {
        Self {
            method: CorruptionMethod::default(),
            header_size: DEFAULT_HEADER_SIZE,
            keep_original: false,
            destination_dir: None,
            seed: None,
        }
    }
}

impl CorruptionConfig {
    /// Creates a config for the given method
    pub fn new(method: CorruptionMethod) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Sets the header size
    pub fn with_header_size(mut self, header_size: usize) -> Self {
        self.header_size = header_size;
        self
    }

    /// Keeps the original directory clean, writing to `destination_dir`
    pub fn keep_original(mut self, keep: bool) -> Self {
        self.keep_original = keep;
        self
    }

    /// Sets the output directory used with `keep_original`
    pub fn with_destination(mut self, dir: impl Into<PathBuf>) -> Self {
        self.destination_dir = Some(dir.into());
        self
    }

    /// Makes randomized methods reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.header_size == 0 {
            return Err(ConfigError::ZeroHeaderSize);
        }
        Ok(())
    }
}
