//! Corruption engine
//!
//! Reads one file, damages it with the configured method and writes the
//! result to `<base>/corrupted_<basename>`. Errors never escape: every call
//! ends in exactly one [`FileJob`].

use crate::application::dto::CorruptionConfig;
use crate::core::{EngineError, Result};
use crate::domain::entities::{CorruptionReport, FileJob};
use crate::domain::repositories::{FileStore, FileStoreError};
use crate::domain::services::byte_transform;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const CORRUPTED_PREFIX: &str = "corrupted_";

/// Corruption use case
pub struct CorruptionEngine<S: FileStore> {
    store: Arc<S>,
    default_destination: PathBuf,
}

impl<S: FileStore> CorruptionEngine<S> {
    /// Creates an engine writing through `store`
    ///
    /// The default destination (used with `keep_original` and no explicit
    /// destination) is the user's documents directory.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            default_destination: default_user_dir(),
        }
    }

    /// Overrides the directory used with `keep_original` and no destination
    pub fn with_default_destination(mut self, dir: impl Into<PathBuf>) -> Self {
        self.default_destination = dir.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Corrupts a single file, resolving the output directory from `config`
    pub fn corrupt(&self, path: &Path, config: &CorruptionConfig) -> FileJob {
        self.corrupt_into(path, config, None)
    }

    /// Corrupts a single file into `output_dir` when given
    ///
    /// The override bypasses `keep_original`/`destination_dir`; traversal
    /// uses it to pin output inside the mirrored tree.
    pub fn corrupt_into(
        &self,
        path: &Path,
        config: &CorruptionConfig,
        output_dir: Option<&Path>,
    ) -> FileJob {
        match self.try_corrupt(path, config, output_dir) {
            Ok((output, report)) => {
                tracing::debug!(
                    "Corrupted {} with {} -> {}",
                    path.display(),
                    config.method,
                    output.display()
                );
                FileJob::corrupted(path, output, report)
            }
            Err(e) => {
                tracing::warn!("Failed to corrupt {}: {}", path.display(), e);
                FileJob::failed(
                    path,
                    e.kind(),
                    format!("Failed to corrupt {}: {}", path.display(), e),
                )
            }
        }
    }

    /// Resolves the directory that receives output for `source`
    pub fn resolve_base(&self, source: &Path, config: &CorruptionConfig) -> PathBuf {
        if config.keep_original {
            config
                .destination_dir
                .clone()
                .unwrap_or_else(|| self.default_destination.clone())
        } else {
            source
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default()
        }
    }

    fn try_corrupt(
        &self,
        path: &Path,
        config: &CorruptionConfig,
        output_dir: Option<&Path>,
    ) -> Result<(PathBuf, CorruptionReport)> {
        let data = self.store.read(path)?;

        let range = config.method.affected_range(data.len(), config.header_size);
        let report = CorruptionReport::new(config.method, &data[range]);

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let corrupted = byte_transform::apply(config.method, &data, config.header_size, &mut rng);

        let base = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => self.resolve_base(path, config),
        };
        if !base.as_os_str().is_empty() {
            self.store
                .create_dir_all(&base)
                .map_err(|source| EngineError::DirectoryCreate {
                    path: base.clone(),
                    source,
                })?;
        }

        let output = base.join(prefixed_name(CORRUPTED_PREFIX, path)?);
        self.store.write(&output, &corrupted)?;

        Ok((output, report))
    }
}

/// Builds `<prefix><basename>` for `path`
pub fn prefixed_name(prefix: &str, path: &Path) -> Result<OsString> {
    let name = path.file_name().ok_or_else(|| {
        EngineError::Io(FileStoreError::NotFound(format!(
            "{} has no file name",
            path.display()
        )))
    })?;

    let mut out = OsString::from(prefix);
    out.push(name);
    Ok(out)
}

/// Documents directory, then home directory, then the working directory
pub fn default_user_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
