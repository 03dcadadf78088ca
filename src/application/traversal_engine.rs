//! Traversal engine
//!
//! Walks a directory tree and corrupts every regular file into a mirrored
//! tree named `corrupted_<root>`. Hidden entries are skipped and symlinks
//! are not followed. A directory whose mirror cannot be created aborts only
//! its own branch. Events reach the sink in walk order, as they happen.

use crate::application::corruption_engine::{CORRUPTED_PREFIX, CorruptionEngine, prefixed_name};
use crate::application::dto::CorruptionConfig;
use crate::application::events::EventSink;
use crate::core::ErrorKind;
use crate::domain::entities::{Event, FileJob, LogEvent, LogKind};
use crate::domain::repositories::FileStore;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::{DirEntry, WalkDir};

/// Tally of one tree walk; the jobs themselves go to the sink
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalReport {
    /// Mirror root the walk wrote into
    pub mirror_root: PathBuf,
    /// One per visited regular file
    pub files: usize,
    pub failed: usize,
}

impl TraversalReport {
    fn record<K: EventSink + ?Sized>(&mut self, job: FileJob, sink: &K) {
        self.files += 1;
        if !job.is_success() {
            self.failed += 1;
        }
        sink.emit(Event::Job(job));
    }
}

fn log<K: EventSink + ?Sized>(sink: &K, kind: LogKind, message: String) {
    sink.emit(Event::Log(LogEvent::new(kind, message)));
}

/// Directory traversal use case
pub struct TraversalEngine<S: FileStore> {
    engine: Arc<CorruptionEngine<S>>,
}

impl<S: FileStore> TraversalEngine<S> {
    pub fn new(engine: Arc<CorruptionEngine<S>>) -> Self {
        Self { engine }
    }

    /// Corrupts every non-hidden regular file below `root`
    pub fn corrupt_tree<K: EventSink + ?Sized>(
        &self,
        root: &Path,
        config: &CorruptionConfig,
        sink: &K,
    ) -> TraversalReport {
        let root = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
        let mut report = TraversalReport::default();

        let name = match prefixed_name(CORRUPTED_PREFIX, &root) {
            Ok(name) => name,
            Err(e) => {
                log(
                    sink,
                    LogKind::Error,
                    format!("Cannot mirror {}: {}", root.display(), e),
                );
                return report;
            }
        };
        let mirror_root = self.engine.resolve_base(&root, config).join(name);
        report.mirror_root = mirror_root.clone();

        tracing::info!(
            "Corrupting tree {} into {}",
            root.display(),
            mirror_root.display()
        );

        // Source directories whose mirror could not be created
        let mut blocked: Vec<PathBuf> = Vec::new();
        if !self.create_mirror(&root, &mirror_root, sink) {
            blocked.push(root.clone());
        }

        let mirror_canonical =
            fs::canonicalize(&mirror_root).unwrap_or_else(|_| mirror_root.clone());
        let walker = WalkDir::new(&root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !is_hidden(entry) && entry.path() != mirror_canonical);

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    log(
                        sink,
                        LogKind::Warning,
                        format!("Skipping unreadable entry: {}", e),
                    );
                    continue;
                }
            };

            let path = entry.path();
            let target = match path.strip_prefix(&root) {
                Ok(relative) => mirror_root.join(relative),
                Err(_) => continue,
            };
            let is_blocked = blocked.iter().any(|dir| path.starts_with(dir));

            if entry.file_type().is_dir() {
                if !is_blocked && !self.create_mirror(path, &target, sink) {
                    blocked.push(path.to_path_buf());
                }
            } else if entry.file_type().is_file() {
                let job = if is_blocked {
                    FileJob::failed(
                        path,
                        ErrorKind::DirectoryCreate,
                        format!(
                            "Skipped {}: mirror directory could not be created",
                            path.display()
                        ),
                    )
                } else {
                    let out_dir = target.parent().unwrap_or(&mirror_root);
                    self.engine.corrupt_into(path, config, Some(out_dir))
                };
                report.record(job, sink);
            } else {
                log(
                    sink,
                    LogKind::Debug,
                    format!("Skipping non-regular entry {}", path.display()),
                );
            }
        }

        tracing::info!(
            "Tree {} done: {} files, {} failed",
            root.display(),
            report.files,
            report.failed
        );

        report
    }

    /// Creates the mirror of `source`, recording the outcome
    fn create_mirror<K: EventSink + ?Sized>(
        &self,
        source: &Path,
        target: &Path,
        sink: &K,
    ) -> bool {
        match self.engine.store().create_dir_all(target) {
            Ok(()) => {
                log(sink, LogKind::Debug, format!("Created {}", target.display()));
                true
            }
            Err(e) => {
                tracing::error!(
                    "Could not create {} for {}: {}",
                    target.display(),
                    source.display(),
                    e
                );
                log(
                    sink,
                    LogKind::Error,
                    format!(
                        "Could not create directory {}: {}; skipping {}",
                        target.display(),
                        e,
                        source.display()
                    ),
                );
                false
            }
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}
