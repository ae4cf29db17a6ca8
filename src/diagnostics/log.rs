//! Structured JSON log sink
//!
//! Renders one JSON object per line: event name first, then severity,
//! then event fields in their declared order. Info goes to stdout,
//! errors to stderr. Write failures are swallowed; logging must never
//! fail the caller.

use std::io::{self, Write};

use super::{DiagnosticEvent, DiagnosticSink, Severity};

/// Sink that writes JSON lines to the process streams.
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    /// Create a new log sink.
    pub fn new() -> Self {
        Self
    }

    /// Render an event as a single JSON line.
    fn render(event: &DiagnosticEvent) -> String {
        let mut line = String::with_capacity(128);
        line.push_str("{\"event\":\"");
        line.push_str(event.as_str());
        line.push_str("\",\"severity\":\"");
        line.push_str(event.severity().as_str());
        line.push('"');

        for (key, value) in event.fields() {
            line.push_str(",\"");
            line.push_str(key);
            line.push_str("\":\"");
            line.push_str(&escape_json(&value));
            line.push('"');
        }

        line.push('}');
        line
    }
}

impl DiagnosticSink for LogSink {
    fn record(&self, event: DiagnosticEvent) {
        let line = Self::render(&event);
        let _ = match event.severity() {
            Severity::Error => writeln!(io::stderr(), "{}", line),
            _ => writeln!(io::stdout(), "{}", line),
        };
    }
}

/// Escape special JSON characters.
fn escape_json(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
