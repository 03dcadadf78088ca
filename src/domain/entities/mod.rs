//! Domain entities
//!
//! Core objects of the corruption and recovery domain.

mod corruption_method;
mod corruption_report;
mod file_job;
mod file_signature;

pub use corruption_method::{CorruptionMethod, ParseMethodError};
pub use corruption_report::CorruptionReport;
pub use file_job::{Event, FileJob, JobOutcome, LogEvent, LogKind};
pub use file_signature::{FileType, SignatureEntry};
