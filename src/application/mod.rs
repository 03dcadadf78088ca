//! Application layer
//!
//! Engines that orchestrate the domain services over the file store, and
//! the runner that exposes them as batch operations.

pub mod dto;
mod corruption_engine;
mod events;
mod recovery_engine;
mod runner;
mod traversal_engine;

pub use corruption_engine::{CORRUPTED_PREFIX, CorruptionEngine, default_user_dir};
pub use events::{EventLog, EventSink, LogFilter};
pub use recovery_engine::{RECOVERED_PREFIX, RecoveryEngine};
pub use runner::{BatchSummary, JobRunner};
pub use traversal_engine::{TraversalEngine, TraversalReport};
