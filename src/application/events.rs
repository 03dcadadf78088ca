//! Event sinks
//!
//! Workers push every [`Event`] into a sink. Sinks must accept concurrent
//! producers; the engine itself never filters, [`LogFilter`] is applied by
//! whoever consumes the events.

use crate::domain::entities::{Event, FileJob, LogKind};
use crossbeam_channel::Sender;
use parking_lot::Mutex;
use std::collections::HashSet;

/// Destination for events produced by concurrent workers
pub trait EventSink: Send + Sync {
    fn emit(&self, event: Event);
}

impl EventSink for Sender<Event> {
    fn emit(&self, event: Event) {
        // A dropped receiver means the caller stopped listening
        let _ = self.send(event);
    }
}

/// Append-only, mutex-guarded event collector
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<Event>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event recorded so far
    pub fn snapshot(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Removes and returns every recorded event
    pub fn drain(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Returns the recorded jobs, in arrival order
    pub fn jobs(&self) -> Vec<FileJob> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| event.as_job().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for EventLog {
    fn emit(&self, event: Event) {
        self.events.lock().push(event);
    }
}

/// Set of log kinds a consumer wants to see
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    enabled: HashSet<LogKind>,
}

impl LogFilter {
    pub fn new(kinds: impl IntoIterator<Item = LogKind>) -> Self {
        Self {
            enabled: kinds.into_iter().collect(),
        }
    }

    pub fn all() -> Self {
        Self::new(LogKind::ALL)
    }

    pub fn allows(&self, kind: LogKind) -> bool {
        self.enabled.contains(&kind)
    }

    pub fn enable(&mut self, kind: LogKind) {
        self.enabled.insert(kind);
    }
}

impl Default for LogFilter {
    fn default() -> Self {
        Self::all()
    }
}
