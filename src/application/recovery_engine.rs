//! Recovery engine
//!
//! Runs the repair chain over one file and writes the first candidate.
//! The post-condition (the output still classifies as the type the source
//! extension promised) is checked in memory, so a failed recovery never
//! leaves a written file behind.

use crate::application::corruption_engine::prefixed_name;
use crate::application::dto::RecoveryConfig;
use crate::core::{EngineError, Result};
use crate::domain::entities::{FileJob, FileType};
use crate::domain::repositories::FileStore;
use crate::domain::services::{Repair, SignatureCatalog, find_repair};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const RECOVERED_PREFIX: &str = "recovered_";

/// Terminal, non-error states of a recovery
#[derive(Debug, Clone, PartialEq, Eq)]
enum Recovery {
    Repaired { output: PathBuf, method: &'static str },
    NotCorrupted(String),
}

/// Recovery use case
pub struct RecoveryEngine<S: FileStore> {
    store: Arc<S>,
    catalog: SignatureCatalog,
}

impl<S: FileStore> RecoveryEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            catalog: SignatureCatalog::default(),
        }
    }

    /// Uses a custom signature catalog for matching and classification
    pub fn with_catalog(mut self, catalog: SignatureCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn catalog(&self) -> &SignatureCatalog {
        &self.catalog
    }

    /// Attempts to repair the header of `path`
    pub fn recover(&self, path: &Path, config: &RecoveryConfig) -> FileJob {
        match self.try_recover(path, config) {
            Ok(Recovery::Repaired { output, method }) => {
                tracing::info!("{}: {} -> {}", method, path.display(), output.display());
                FileJob::recovered(path, output, method)
            }
            Ok(Recovery::NotCorrupted(detail)) => {
                tracing::debug!("{} is not corrupted: {}", path.display(), detail);
                FileJob::not_corrupted(path, &detail)
            }
            Err(e) => {
                tracing::warn!("Failed to recover {}: {}", path.display(), e);
                FileJob::failed(
                    path,
                    e.kind(),
                    format!("Failed to recover {}: {}", path.display(), e),
                )
            }
        }
    }

    /// Resolves where a repaired copy of `path` is written
    pub fn resolve_output(&self, path: &Path, config: &RecoveryConfig) -> Result<PathBuf> {
        if config.replace_original {
            return Ok(path.to_path_buf());
        }
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        match &config.destination_dir {
            // A destination equal to the source's own directory would alias it
            Some(dir) if !same_dir(dir, parent) => Ok(dir.join(prefixed_name("", path)?)),
            Some(dir) => Ok(dir.join(prefixed_name(RECOVERED_PREFIX, path)?)),
            None => Ok(parent.join(prefixed_name(RECOVERED_PREFIX, path)?)),
        }
    }

    fn try_recover(&self, path: &Path, config: &RecoveryConfig) -> Result<Recovery> {
        let data = self.store.read(path)?;
        let pre_type = FileType::from_path(path);
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        let Some(repair) = find_repair(&data, extension, config.header_size, &self.catalog) else {
            return self.classify_untouched(path, &data, extension);
        };

        let output = self.resolve_output(path, config)?;
        verify_candidate(&output, pre_type, &repair)?;

        if !config.replace_original {
            if let Some(dir) = &config.destination_dir {
                self.store
                    .create_dir_all(dir)
                    .map_err(|source| EngineError::DirectoryCreate {
                        path: dir.clone(),
                        source,
                    })?;
            }
        }
        self.store.write(&output, &repair.candidate)?;

        Ok(Recovery::Repaired {
            output,
            method: repair.rule.method_name(),
        })
    }

    /// Decides between NotCorrupted and UnknownPattern when no rule applied
    fn classify_untouched(&self, path: &Path, data: &[u8], extension: &str) -> Result<Recovery> {
        if self.catalog.matches(data, extension) {
            let file_type = FileType::from_extension(extension);
            return Ok(Recovery::NotCorrupted(format!(
                "header matches {}",
                file_type
            )));
        }
        if let Some(entry) = self.catalog.identify(data) {
            return Ok(Recovery::NotCorrupted(format!(
                "content identifies as {}",
                entry.file_type()
            )));
        }
        Err(EngineError::UnknownPattern(path.to_path_buf()))
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    let resolve = |dir: &Path| {
        let dir = if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir
        };
        fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
    };
    resolve(a) == resolve(b)
}

/// The output must classify as the source type, and that type must be known
fn verify_candidate(output: &Path, pre_type: FileType, repair: &Repair) -> Result<()> {
    let post_type = FileType::from_path(output);
    if post_type != pre_type || !post_type.is_known() {
        return Err(EngineError::TypeMismatch {
            expected: pre_type.name().to_string(),
            actual: format!("{} (after {})", post_type.name(), repair.rule),
        });
    }
    Ok(())
}
