//! In-memory document store
//!
//! The in-process implementation of the storage traits. Collections
//! are created lazily and hold documents in insertion order.
//!
//! For tests, the client exposes one-shot fault toggles: arm one and
//! the next matching operation fails with `StorageError::Unavailable`,
//! then the toggle clears itself. `fail_database` stays armed until
//! cleared, modeling a store that is down rather than flaky.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::Value;

use super::{DocumentCollection, DocumentDatabase, StorageClient, StorageError, StorageResult};

/// One-shot and latched fault toggles shared across a client's
/// collections.
#[derive(Debug, Default)]
struct FaultToggles {
    database: AtomicBool,
    next_find: AtomicBool,
    next_delete: AtomicBool,
    next_insert: AtomicBool,
}

impl FaultToggles {
    /// Consume a one-shot toggle, returning whether it was armed.
    fn take(flag: &AtomicBool) -> bool {
        flag.swap(false, Ordering::SeqCst)
    }
}

/// In-memory storage client.
pub struct MemoryStorageClient {
    database: Arc<MemoryDatabase>,
    faults: Arc<FaultToggles>,
}

impl MemoryStorageClient {
    /// Create a client for the named database.
    pub fn new(database: impl Into<String>) -> Self {
        let faults = Arc::new(FaultToggles::default());
        Self {
            database: Arc::new(MemoryDatabase {
                name: database.into(),
                collections: RwLock::new(HashMap::new()),
                faults: faults.clone(),
            }),
            faults,
        }
    }

    /// Direct handle to a collection, for seeding and inspection in
    /// tests without going through the async traits.
    pub fn collection(&self, name: &str) -> Arc<MemoryCollection> {
        self.database.memory_collection(name)
    }

    /// Make every `database()` call fail until `restore_database`.
    pub fn fail_database(&self) {
        self.faults.database.store(true, Ordering::SeqCst);
    }

    /// Clear the database fault.
    pub fn restore_database(&self) {
        self.faults.database.store(false, Ordering::SeqCst);
    }

    /// Make the next `find_all` fail.
    pub fn fail_next_find(&self) {
        self.faults.next_find.store(true, Ordering::SeqCst);
    }

    /// Make the next `delete_all` fail.
    pub fn fail_next_delete(&self) {
        self.faults.next_delete.store(true, Ordering::SeqCst);
    }

    /// Make the next `insert_one` fail.
    pub fn fail_next_insert(&self) {
        self.faults.next_insert.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl StorageClient for MemoryStorageClient {
    async fn database(&self) -> StorageResult<Arc<dyn DocumentDatabase>> {
        if self.faults.database.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(format!(
                "database '{}' is unreachable",
                self.database.name
            )));
        }
        Ok(self.database.clone() as Arc<dyn DocumentDatabase>)
    }
}

/// In-memory database: a map of named collections.
pub struct MemoryDatabase {
    name: String,
    collections: RwLock<HashMap<String, Arc<MemoryCollection>>>,
    faults: Arc<FaultToggles>,
}

impl MemoryDatabase {
    fn memory_collection(&self, name: &str) -> Arc<MemoryCollection> {
        if let Some(existing) = self.collections.read().unwrap().get(name) {
            return existing.clone();
        }
        let mut collections = self.collections.write().unwrap();
        collections
            .entry(name.to_string())
            .or_insert_with(|| {
                Arc::new(MemoryCollection {
                    documents: RwLock::new(Vec::new()),
                    faults: self.faults.clone(),
                })
            })
            .clone()
    }
}

impl DocumentDatabase for MemoryDatabase {
    fn collection(&self, name: &str) -> Arc<dyn DocumentCollection> {
        self.memory_collection(name) as Arc<dyn DocumentCollection>
    }
}

/// In-memory collection: documents in insertion order.
pub struct MemoryCollection {
    documents: RwLock<Vec<Value>>,
    faults: Arc<FaultToggles>,
}

impl MemoryCollection {
    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.documents.read().unwrap().len()
    }

    /// Whether the collection holds no documents.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all documents, for test inspection.
    pub fn documents(&self) -> Vec<Value> {
        self.documents.read().unwrap().clone()
    }
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    async fn find_all(&self) -> StorageResult<Vec<Value>> {
        if FaultToggles::take(&self.faults.next_find) {
            return Err(StorageError::Unavailable("find failed".to_string()));
        }
        let documents = self
            .documents
            .read()
            .map_err(|_| StorageError::Backend("lock poisoned".to_string()))?;
        Ok(documents.clone())
    }

    async fn delete_all(&self) -> StorageResult<u64> {
        if FaultToggles::take(&self.faults.next_delete) {
            return Err(StorageError::Backend("delete failed".to_string()));
        }
        let mut documents = self
            .documents
            .write()
            .map_err(|_| StorageError::Backend("lock poisoned".to_string()))?;
        let removed = documents.len() as u64;
        documents.clear();
        Ok(removed)
    }

    async fn insert_one(&self, document: Value) -> StorageResult<()> {
        if FaultToggles::take(&self.faults.next_insert) {
            return Err(StorageError::Backend("insert failed".to_string()));
        }
        let mut documents = self
            .documents
            .write()
            .map_err(|_| StorageError::Backend("lock poisoned".to_string()))?;
        documents.push(document);
        Ok(())
    }
}
