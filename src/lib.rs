//! File header corruption and best-effort recovery.
//!
//! [`application::CorruptionEngine`] damages a file's header (or the whole
//! file) with one of the [`CorruptionMethod`]s; [`application::RecoveryEngine`]
//! runs an ordered chain of repair rules against the [`SignatureCatalog`] to
//! rebuild a valid header. [`application::JobRunner`] exposes both as batch
//! operations producing one [`FileJob`] per processed file.

pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::dto::{CorruptionConfig, RecoveryConfig, Settings};
pub use domain::entities::{
    CorruptionMethod, CorruptionReport, Event, FileJob, FileType, JobOutcome, LogEvent, LogKind,
};
pub use domain::services::SignatureCatalog;
