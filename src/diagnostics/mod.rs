//! Diagnostics subsystem for viewstore
//!
//! Diagnostics are a side channel: core components emit structured
//! events to an injected sink and never carry them in return values.
//!
//! # Principles
//!
//! 1. Recording is fire-and-forget; it never fails the caller
//! 2. No effect on control flow
//! 3. One log line = one event
//! 4. Deterministic field ordering

mod event;
mod log;
mod memory;
mod sink;

pub use event::{DiagnosticEvent, Severity, StoreOperation};
pub use log::LogSink;
pub use memory::MemorySink;
pub use sink::DiagnosticSink;
