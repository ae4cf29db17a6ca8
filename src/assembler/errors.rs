//! Assembly error types.

use thiserror::Error;

/// Result type for assembly operations
pub type AssemblyResult<T> = Result<T, AssemblyError>;

/// Faults raised while building content views.
#[derive(Debug, Clone, Error)]
pub enum AssemblyError {
    /// The inputs cannot produce a valid view sequence.
    #[error("invalid assembly input: {0}")]
    InvalidInput(String),

    /// A data source the assembler depends on was unavailable.
    #[error("assembly source unavailable: {0}")]
    SourceUnavailable(String),
}
