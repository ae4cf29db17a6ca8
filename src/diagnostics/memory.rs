//! In-memory diagnostic sink for testing.

use std::sync::Mutex;

use super::{DiagnosticEvent, DiagnosticSink, Severity};

/// Sink that buffers events for later assertion.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl MemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, in order.
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Recorded events at the given severity.
    pub fn events_at(&self, severity: Severity) -> Vec<DiagnosticEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.severity() == severity)
            .collect()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, event: DiagnosticEvent) {
        self.events.lock().unwrap().push(event);
    }
}
