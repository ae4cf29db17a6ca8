//! The singleton-document read/write protocol.

use std::sync::Arc;

use serde_json::Value;

use crate::diagnostics::{DiagnosticEvent, DiagnosticSink, StoreOperation};
use crate::model::{ContentViewCollection, WrapperDocument};
use crate::storage::{DocumentCollection, StorageClient, StorageError, StorageResult};

/// Collection name shared by every reader and writer of the aggregate.
pub const CONTENT_VIEWS_COLLECTION: &str = "location_content_views_wrapper";

/// Store encapsulating access to the singleton wrapper collection.
///
/// Holds no state across calls: every operation round-trips to the
/// storage client.
pub struct SingletonCollectionStore {
    client: Arc<dyn StorageClient>,
    sink: Arc<dyn DiagnosticSink>,
}

impl SingletonCollectionStore {
    /// Create a store over the given storage client.
    pub fn new(client: Arc<dyn StorageClient>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { client, sink }
    }

    /// Read the aggregate.
    ///
    /// Returns `None` when no data exists: zero documents, or any
    /// transport fault during the fetch. With exactly one document the
    /// payload is unwrapped; a missing or malformed payload and the
    /// more-than-one anomaly both yield an empty collection plus an
    /// error-level diagnostic.
    ///
    /// `suppress_absence_logging` silences the transport-fault
    /// diagnostic for existence probes, where absence is a normal,
    /// quiet outcome.
    pub async fn read(&self, suppress_absence_logging: bool) -> Option<ContentViewCollection> {
        let documents = match self.fetch_all().await {
            Ok(documents) => documents,
            Err(fault) => {
                // The wrapper may simply not exist yet (first run).
                if !suppress_absence_logging {
                    self.sink.record(DiagnosticEvent::TransportFault {
                        operation: StoreOperation::Read,
                        message: fault.to_string(),
                    });
                }
                return None;
            }
        };

        match documents.as_slice() {
            [] => None,
            [document] => Some(self.unwrap_single(document)),
            many => {
                self.sink.record(DiagnosticEvent::MultipleDocuments {
                    count: many.len(),
                });
                Some(ContentViewCollection::empty())
            }
        }
    }

    /// Replace the aggregate: delete every wrapper document, then
    /// insert one new wrapper around `payload`.
    ///
    /// The two steps are not atomic; a fault between them leaves the
    /// collection empty and is reported as a failed write. No rollback
    /// is attempted.
    pub async fn write(&self, payload: ContentViewCollection) -> bool {
        match self.replace(payload).await {
            Ok(()) => true,
            Err(fault) => {
                self.sink.record(DiagnosticEvent::TransportFault {
                    operation: StoreOperation::Write,
                    message: fault.to_string(),
                });
                false
            }
        }
    }

    async fn collection(&self) -> StorageResult<Arc<dyn DocumentCollection>> {
        let database = self.client.database().await?;
        Ok(database.collection(CONTENT_VIEWS_COLLECTION))
    }

    async fn fetch_all(&self) -> StorageResult<Vec<Value>> {
        self.collection().await?.find_all().await
    }

    /// Unwrap the payload of the single observed document. A document
    /// whose inner aggregate is null, absent, or not the expected
    /// shape counts as missing, not as a transport fault.
    fn unwrap_single(&self, document: &Value) -> ContentViewCollection {
        match serde_json::from_value::<WrapperDocument>(document.clone()) {
            Ok(WrapperDocument {
                collection: Some(collection),
            }) => collection,
            _ => {
                self.sink.record(DiagnosticEvent::PayloadMissing);
                ContentViewCollection::empty()
            }
        }
    }

    async fn replace(&self, payload: ContentViewCollection) -> StorageResult<()> {
        let collection = self.collection().await?;
        collection.delete_all().await?;

        let document = serde_json::to_value(WrapperDocument::wrap(payload))
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        collection.insert_one(document).await
    }
}
