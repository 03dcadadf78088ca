//! Settings file DTO
//!
//! A JSON document bundling the default corruption and recovery configs and
//! the log kinds a caller wants to see. Every field is optional.
//!
//! ```json
//! {
//!   "corruption": { "method": "zero-fill", "header_size": 512 },
//!   "recovery": { "replace_original": false },
//!   "log_kinds": ["error", "warning", "success"]
//! }
//! ```

use super::{CorruptionConfig, RecoveryConfig};
use crate::core::ConfigError;
use crate::domain::entities::LogKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub corruption: CorruptionConfig,
    pub recovery: RecoveryConfig,
    pub log_kinds: Vec<LogKind>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            corruption: CorruptionConfig::default(),
            recovery: RecoveryConfig::default(),
            log_kinds: vec![
                LogKind::Info,
                LogKind::Warning,
                LogKind::Error,
                LogKind::Success,
            ],
        }
    }
}

impl Settings {
    /// Loads and validates a settings file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.corruption.validate()?;
        self.recovery.validate()
    }
}
