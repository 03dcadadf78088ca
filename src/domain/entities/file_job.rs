//! File job entity
//!
//! One `FileJob` is produced for every processed input file. It is the unit
//! the caller logs, displays or serializes; the engine never persists it.

use crate::core::ErrorKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::corruption_report::CorruptionReport;

/// Classification attached to every emitted event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    Info,
    Warning,
    Error,
    Debug,
    Success,
}

impl LogKind {
    pub const ALL: [LogKind; 5] = [
        LogKind::Info,
        LogKind::Warning,
        LogKind::Error,
        LogKind::Debug,
        LogKind::Success,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::Info => "info",
            LogKind::Warning => "warning",
            LogKind::Error => "error",
            LogKind::Debug => "debug",
            LogKind::Success => "success",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown log kind '{s}'"))
    }
}

/// Terminal state of a processed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum JobOutcome {
    /// Corrupted copy written
    Corrupted,
    /// Repaired candidate written, tagged with the rule that produced it
    Recovered { method: String },
    /// Recovery found nothing to repair
    NotCorrupted,
    /// Nothing (or nothing valid) was produced
    Failed { error: ErrorKind },
}

impl JobOutcome {
    /// `Corrupted`, `Recovered` and `NotCorrupted` all count as success
    pub fn is_success(&self) -> bool {
        !matches!(self, JobOutcome::Failed { .. })
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            JobOutcome::Failed { error } => Some(*error),
            _ => None,
        }
    }
}

/// Result of processing one input file
#[derive(Debug, Clone, Serialize)]
pub struct FileJob {
    pub source_path: PathBuf,
    /// Where output was written; `None` when nothing was written
    pub output_path: Option<PathBuf>,
    pub outcome: JobOutcome,
    pub message: String,
    pub kind: LogKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<CorruptionReport>,
}

impl FileJob {
    pub fn corrupted(source: &Path, output: PathBuf, report: CorruptionReport) -> Self {
        let (kind, message) = if report.method.is_repairable() {
            (
                LogKind::Success,
                format!(
                    "Corrupted {} with {} ({} bytes) -> {}",
                    source.display(),
                    report.method,
                    report.affected_bytes,
                    output.display()
                ),
            )
        } else {
            (
                LogKind::Warning,
                format!(
                    "Overwrote all of {} with {} ({} bytes) -> {}; this cannot be recovered",
                    source.display(),
                    report.method,
                    report.affected_bytes,
                    output.display()
                ),
            )
        };

        Self {
            source_path: source.to_path_buf(),
            output_path: Some(output),
            outcome: JobOutcome::Corrupted,
            message,
            kind,
            report: Some(report),
        }
    }

    pub fn recovered(source: &Path, output: PathBuf, method: &str) -> Self {
        Self {
            source_path: source.to_path_buf(),
            message: format!(
                "{}: {} -> {}",
                method,
                source.display(),
                output.display()
            ),
            output_path: Some(output),
            outcome: JobOutcome::Recovered {
                method: method.to_string(),
            },
            kind: LogKind::Success,
            report: None,
        }
    }

    pub fn not_corrupted(source: &Path, detail: &str) -> Self {
        Self {
            source_path: source.to_path_buf(),
            output_path: None,
            outcome: JobOutcome::NotCorrupted,
            message: format!("{} is not corrupted ({})", source.display(), detail),
            kind: LogKind::Info,
            report: None,
        }
    }

    pub fn failed(source: &Path, error: ErrorKind, message: String) -> Self {
        Self {
            source_path: source.to_path_buf(),
            output_path: None,
            outcome: JobOutcome::Failed { error },
            message,
            kind: LogKind::Error,
            report: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}

/// A log-worthy event that is not tied to a single processed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    pub kind: LogKind,
    pub message: String,
}

impl LogEvent {
    pub fn new(kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Item of the result stream handed back to the caller
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Job(FileJob),
    Log(LogEvent),
}

impl Event {
    pub fn kind(&self) -> LogKind {
        match self {
            Event::Job(job) => job.kind,
            Event::Log(log) => log.kind,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Event::Job(job) => &job.message,
            Event::Log(log) => &log.message,
        }
    }

    pub fn as_job(&self) -> Option<&FileJob> {
        match self {
            Event::Job(job) => Some(job),
            Event::Log(_) => None,
        }
    }
}
