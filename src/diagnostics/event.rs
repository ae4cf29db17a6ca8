//! Diagnostic events and severity levels
//!
//! Events are explicit and typed. Each event carries a fixed severity,
//! except a transport fault, whose severity depends on the operation:
//! a read fault degrades to the expected "no data yet" state and is
//! informational, a write fault is an error.

use std::fmt;

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which store operation a transport fault occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Read,
    Write,
}

impl StoreOperation {
    /// Returns the operation name string.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreOperation::Read => "read",
            StoreOperation::Write => "write",
        }
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Observable anomalies and faults in the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// A wrapper document exists but its inner aggregate is null or
    /// malformed; the reader served empty data instead.
    PayloadMissing,

    /// More than one wrapper document was found in the singleton
    /// collection; the reader served empty data instead of picking one.
    MultipleDocuments {
        /// How many documents were observed.
        count: usize,
    },

    /// The storage client itself faulted during an operation.
    TransportFault {
        /// The operation that faulted.
        operation: StoreOperation,
        /// The underlying fault message.
        message: String,
    },

    /// The content assembler faulted while building views.
    AssemblyFault {
        /// The underlying fault message.
        message: String,
    },
}

impl DiagnosticEvent {
    /// Returns the event name string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticEvent::PayloadMissing => "PAYLOAD_MISSING",
            DiagnosticEvent::MultipleDocuments { .. } => "MULTIPLE_DOCUMENTS",
            DiagnosticEvent::TransportFault { .. } => "TRANSPORT_FAULT",
            DiagnosticEvent::AssemblyFault { .. } => "ASSEMBLY_FAULT",
        }
    }

    /// Returns the severity this event is recorded at.
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticEvent::PayloadMissing => Severity::Error,
            DiagnosticEvent::MultipleDocuments { .. } => Severity::Error,
            DiagnosticEvent::TransportFault {
                operation: StoreOperation::Read,
                ..
            } => Severity::Info,
            DiagnosticEvent::TransportFault {
                operation: StoreOperation::Write,
                ..
            } => Severity::Error,
            DiagnosticEvent::AssemblyFault { .. } => Severity::Error,
        }
    }

    /// Structured fields for rendering, in deterministic order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            DiagnosticEvent::PayloadMissing => vec![],
            DiagnosticEvent::MultipleDocuments { count } => {
                vec![("count", count.to_string())]
            }
            DiagnosticEvent::TransportFault { operation, message } => vec![
                ("operation", operation.as_str().to_string()),
                ("message", message.clone()),
            ],
            DiagnosticEvent::AssemblyFault { message } => {
                vec![("message", message.clone())]
            }
        }
    }
}
