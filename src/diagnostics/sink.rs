//! The diagnostic sink trait
//!
//! Both core components receive a sink at construction and emit events
//! through it. The sink decides how and where events are rendered.

use super::DiagnosticEvent;

/// Destination for diagnostic events.
///
/// Recording is fire-and-forget: it returns nothing, is not awaited,
/// and must never panic or otherwise affect the caller's control flow.
pub trait DiagnosticSink: Send + Sync {
    /// Record one event.
    fn record(&self, event: DiagnosticEvent);
}
