//! Content assembly for viewstore
//!
//! The assembler is a collaborator chosen at service wiring time: it
//! maps raw location and product inputs to the ordered view sequence
//! that gets persisted. The facade catches assembly faults and reports
//! them through the diagnostic sink; they never reach callers.

mod basic;
mod errors;

use async_trait::async_trait;

use crate::model::{ContentView, LocationInput, ProductInput};

pub use basic::BasicAssembler;
pub use errors::{AssemblyError, AssemblyResult};

/// Maps raw inputs to an ordered sequence of content views.
#[async_trait]
pub trait ContentAssembler: Send + Sync {
    /// Build one view sequence from the given inputs.
    ///
    /// Implementations must preserve input order in the output.
    async fn assemble(
        &self,
        locations: &[LocationInput],
        products: &[ProductInput],
    ) -> AssemblyResult<Vec<ContentView>>;
}
