//! Observer seam for load/save diagnostics.
//!
//! Bulk operations report recoverable conditions (skipped lines, defaulted
//! fields, unwritable records) as [`Event`]s through an injected
//! [`EventSink`] rather than a process-wide logger. [`TracingSink`] is the
//! production sink; [`CapturingSink`] accumulates events so tests and
//! drivers can inspect them.

use std::cell::RefCell;
use std::path::PathBuf;

/// A recoverable condition observed during bulk load/save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A malformed field was replaced with a fallback value.
    FieldDefaulted {
        field: &'static str,
        raw: String,
        substituted: String,
    },
    /// A structurally invalid line was rejected; the load continued.
    LineSkipped { line: usize, reason: String },
    /// A record could not be written; remaining records were still written.
    RecordSkipped { name: String, reason: String },
    /// The source file could not be opened; the load yielded an empty
    /// collection.
    FileUnreadable { path: PathBuf, reason: String },
}

/// Receives diagnostic events from load/save and parse.
pub trait EventSink {
    fn record(&self, event: Event);
}

/// Forwards every event to `tracing` at WARN level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: Event) {
        match event {
            Event::FieldDefaulted {
                field,
                raw,
                substituted,
            } => {
                tracing::warn!(field, %raw, %substituted, "malformed field defaulted");
            }
            Event::LineSkipped { line, reason } => {
                tracing::warn!(line, %reason, "skipping invalid line");
            }
            Event::RecordSkipped { name, reason } => {
                tracing::warn!(%name, %reason, "record not written");
            }
            Event::FileUnreadable { path, reason } => {
                tracing::warn!(path = %path.display(), %reason, "file unreadable, loading empty collection");
            }
        }
    }
}

/// Accumulates events in memory.
///
/// Interior mutability keeps the sink usable behind a shared reference;
/// the core is single-owner, single-thread (no `Sync` needed).
#[derive(Debug, Default)]
pub struct CapturingSink {
    events: RefCell<Vec<Event>>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events recorded so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventSink for CapturingSink {
    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}
