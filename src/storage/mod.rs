//! Storage client boundary for viewstore
//!
//! The service talks to its document store exclusively through the
//! traits in this module. Documents cross the boundary as raw JSON
//! values; typed (de)serialization happens on the caller's side.
//!
//! # Traits
//!
//! - `StorageClient`: entry point, resolves the database handle
//! - `DocumentDatabase`: resolves named collections
//! - `DocumentCollection`: unfiltered find/delete plus single insert
//!
//! `MemoryStorageClient` is the in-process implementation, with
//! one-shot fault toggles for exercising degraded paths in tests.

mod client;
mod errors;
mod memory;

pub use client::{DocumentCollection, DocumentDatabase, StorageClient};
pub use errors::{StorageError, StorageResult};
pub use memory::{MemoryCollection, MemoryStorageClient};
