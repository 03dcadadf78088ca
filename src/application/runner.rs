//! Job runner
//!
//! The two operations exposed to callers: corrupt a list of paths and
//! recover a list of paths. Each top-level path gets its own rayon task;
//! a directory root is walked sequentially inside its task. Results are
//! funneled into a single [`EventSink`].

use crate::application::corruption_engine::CorruptionEngine;
use crate::application::dto::{CorruptionConfig, RecoveryConfig};
use crate::application::events::EventSink;
use crate::application::recovery_engine::RecoveryEngine;
use crate::application::traversal_engine::TraversalEngine;
use crate::domain::entities::{Event, FileJob};
use crate::domain::repositories::FileStore;
use crossbeam_channel::Receiver;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Tally of a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub duration: Duration,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    fn record(&mut self, job: &FileJob) {
        if job.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.succeeded += other.succeeded;
        self.failed += other.failed;
        self
    }
}

/// Runs corruption and recovery batches
pub struct JobRunner<S: FileStore + 'static> {
    corruption: Arc<CorruptionEngine<S>>,
    traversal: TraversalEngine<S>,
    recovery: RecoveryEngine<S>,
}

impl<S: FileStore + 'static> JobRunner<S> {
    /// Creates a runner whose engines share `store`
    pub fn new(store: Arc<S>) -> Self {
        Self::from_engines(
            CorruptionEngine::new(Arc::clone(&store)),
            RecoveryEngine::new(store),
        )
    }

    pub fn from_engines(corruption: CorruptionEngine<S>, recovery: RecoveryEngine<S>) -> Self {
        let corruption = Arc::new(corruption);
        Self {
            traversal: TraversalEngine::new(Arc::clone(&corruption)),
            corruption,
            recovery,
        }
    }

    /// Corrupts every path, blocking until all workers finish
    pub fn corrupt<K: EventSink + ?Sized>(
        &self,
        paths: &[PathBuf],
        config: &CorruptionConfig,
        sink: &K,
    ) -> BatchSummary {
        let start = Instant::now();
        tracing::info!(
            "Starting corruption of {} paths with {}",
            paths.len(),
            config.method
        );

        let mut summary = paths
            .par_iter()
            .map(|path| self.corrupt_one(path, config, sink))
            .reduce(BatchSummary::default, BatchSummary::merge);
        summary.duration = start.elapsed();

        tracing::info!(
            "Corruption complete: {} succeeded, {} failed in {:.2}s",
            summary.succeeded,
            summary.failed,
            summary.duration.as_secs_f64()
        );
        summary
    }

    /// Recovers every path, blocking until all workers finish
    pub fn recover<K: EventSink + ?Sized>(
        &self,
        paths: &[PathBuf],
        config: &RecoveryConfig,
        sink: &K,
    ) -> BatchSummary {
        let start = Instant::now();
        tracing::info!("Starting recovery of {} paths", paths.len());

        let mut summary = paths
            .par_iter()
            .map(|path| {
                let job = self.recovery.recover(path, config);
                let mut summary = BatchSummary::default();
                summary.record(&job);
                sink.emit(Event::Job(job));
                summary
            })
            .reduce(BatchSummary::default, BatchSummary::merge);
        summary.duration = start.elapsed();

        tracing::info!(
            "Recovery complete: {} succeeded, {} failed in {:.2}s",
            summary.succeeded,
            summary.failed,
            summary.duration.as_secs_f64()
        );
        summary
    }

    /// Corrupts in the background, returning the event stream
    ///
    /// The stream ends once every path has been processed.
    pub fn corrupt_stream(
        self: &Arc<Self>,
        paths: Vec<PathBuf>,
        config: CorruptionConfig,
    ) -> Receiver<Event> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let config = Arc::new(config);

        for path in paths {
            let runner = Arc::clone(self);
            let config = Arc::clone(&config);
            let tx = tx.clone();
            rayon::spawn(move || {
                runner.corrupt_one(&path, &config, &tx);
            });
        }

        rx
    }

    /// Recovers in the background, returning the event stream
    pub fn recover_stream(
        self: &Arc<Self>,
        paths: Vec<PathBuf>,
        config: RecoveryConfig,
    ) -> Receiver<Event> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let config = Arc::new(config);

        for path in paths {
            let runner = Arc::clone(self);
            let config = Arc::clone(&config);
            let tx = tx.clone();
            rayon::spawn(move || {
                tx.emit(Event::Job(runner.recovery.recover(&path, &config)));
            });
        }

        rx
    }

    fn corrupt_one<K: EventSink + ?Sized>(
        &self,
        path: &Path,
        config: &CorruptionConfig,
        sink: &K,
    ) -> BatchSummary {
        let mut summary = BatchSummary::default();

        if self.corruption.store().is_dir(path) {
            let report = self.traversal.corrupt_tree(path, config, sink);
            summary.failed += report.failed;
            summary.succeeded += report.files - report.failed;
        } else {
            let job = self.corruption.corrupt(path, config);
            summary.record(&job);
            sink.emit(Event::Job(job));
        }

        summary
    }
}
