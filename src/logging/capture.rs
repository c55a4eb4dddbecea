//! In-memory backend that records every structured event.
//!
//! Used in tests to assert on exactly what a backend would have received.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

use super::record::LogEvent;

#[derive(Debug)]
pub struct CaptureLogger {
    level: LevelFilter,
    events: Mutex<Vec<LogEvent>>,
}

impl Default for CaptureLogger {
    fn default() -> Self {
        Self::with_level(LevelFilter::Trace)
    }
}

impl CaptureLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(level: LevelFilter) -> Self {
        Self {
            level,
            events: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the recorded events, oldest first.
    pub fn events(&self) -> Vec<LogEvent> {
        self.events.lock().clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<LogEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.events.lock().push(LogEvent::from_record(record));
        }
    }

    fn flush(&self) {}
}
