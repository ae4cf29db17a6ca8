//! Storage client traits
//!
//! Object-safe async traits so the store can hold `Arc<dyn ...>`
//! handles and tests can substitute implementations freely.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::StorageResult;

/// Entry point to a document store.
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Resolve the database handle. Each call re-validates the
    /// connection; no handle is cached across operations.
    async fn database(&self) -> StorageResult<Arc<dyn DocumentDatabase>>;
}

/// A database holding named collections.
pub trait DocumentDatabase: Send + Sync {
    /// Resolve a collection by name, creating it lazily if the backend
    /// requires that.
    fn collection(&self, name: &str) -> Arc<dyn DocumentCollection>;
}

/// A single document collection.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// Fetch every document in the collection, in insertion order.
    async fn find_all(&self) -> StorageResult<Vec<Value>>;

    /// Delete every document in the collection. Returns how many were
    /// removed.
    async fn delete_all(&self) -> StorageResult<u64>;

    /// Insert one document.
    async fn insert_one(&self, document: Value) -> StorageResult<()>;
}
