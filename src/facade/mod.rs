//! Data facade for viewstore
//!
//! Adapts the store protocol to the externally callable surface. Every
//! operation returns a plain value; no fault crosses this boundary.

use std::sync::Arc;

use crate::assembler::ContentAssembler;
use crate::diagnostics::{DiagnosticEvent, DiagnosticSink, StoreOperation};
use crate::model::{ContentViewCollection, LocationInput, ProductInput};
use crate::store::SingletonCollectionStore;

/// The callable operations of the service.
///
/// Holds the store only when storage was configured; readiness of the
/// service itself is independent of storage.
pub struct DataFacade {
    store: Option<SingletonCollectionStore>,
    assembler: Arc<dyn ContentAssembler>,
    sink: Arc<dyn DiagnosticSink>,
}

impl DataFacade {
    /// Create a facade over a configured store.
    pub fn new(
        store: SingletonCollectionStore,
        assembler: Arc<dyn ContentAssembler>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            store: Some(store),
            assembler,
            sink,
        }
    }

    /// Create a facade with no storage configured. Reads serve empty
    /// data and writes fail.
    pub fn without_storage(
        assembler: Arc<dyn ContentAssembler>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            store: None,
            assembler,
            sink,
        }
    }

    /// Liveness signal, independent of storage.
    pub fn is_service_ready(&self) -> bool {
        true
    }

    /// Whether a storage handle was configured. Performs no I/O and
    /// does not verify reachability.
    pub fn is_storage_ready(&self) -> bool {
        self.store.is_some()
    }

    /// Whether usable data exists: a present, non-empty view sequence.
    ///
    /// Absence is a normal outcome here, so the read suppresses the
    /// transport-fault diagnostic.
    pub async fn has_data(&self) -> bool {
        match &self.store {
            Some(store) => store
                .read(true)
                .await
                .is_some_and(|collection| collection.has_views()),
            None => false,
        }
    }

    /// Fetch the aggregate. Always yields a value: absent storage
    /// state maps to a collection with an absent view sequence.
    pub async fn get_data(&self) -> ContentViewCollection {
        match &self.store {
            Some(store) => store
                .read(false)
                .await
                .unwrap_or_else(ContentViewCollection::empty),
            None => ContentViewCollection::empty(),
        }
    }

    /// Assemble views from the inputs and fully replace the stored
    /// aggregate. Returns whether the replace succeeded.
    ///
    /// There is no precondition on existing data: every call replaces
    /// whatever is stored. Assembly runs before any storage access, so
    /// an assembly fault leaves the store untouched.
    pub async fn create_data(
        &self,
        locations: Vec<LocationInput>,
        products: Vec<ProductInput>,
    ) -> bool {
        let views = match self.assembler.assemble(&locations, &products).await {
            Ok(views) => views,
            Err(fault) => {
                self.sink.record(DiagnosticEvent::AssemblyFault {
                    message: fault.to_string(),
                });
                return false;
            }
        };

        let Some(store) = &self.store else {
            self.sink.record(DiagnosticEvent::TransportFault {
                operation: StoreOperation::Write,
                message: "storage not configured".to_string(),
            });
            return false;
        };

        store.write(ContentViewCollection::of(views)).await
    }
}
