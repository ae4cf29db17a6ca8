//! Singleton collection store for viewstore
//!
//! Owns the read/write protocol against one named collection that is
//! expected to hold at most one wrapper document.
//!
//! # Protocol
//!
//! - Read tolerates zero, one, or many documents: zero is expected
//!   (first run), many is a logged anomaly served as empty data
//! - Write is a full replace: delete everything, insert one document
//! - No fault ever reaches the caller; failure paths resolve to values
//!   and diagnostics go to the injected sink

mod singleton;

pub use singleton::{SingletonCollectionStore, CONTENT_VIEWS_COLLECTION};
