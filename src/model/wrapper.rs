//! The persisted wrapper document
//!
//! The store persists exactly one of these per collection under normal
//! operation. It carries no key: "the document" is whichever single
//! document currently resides in the collection.

use serde::{Deserialize, Serialize};

use super::ContentViewCollection;

/// Top-level persisted unit, owning one content view collection.
///
/// Stored shape: `{ "ContentViewCollection": { "ContentViews": [...] } }`
/// with both levels optional on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperDocument {
    /// The wrapped aggregate. Absent or null in malformed documents.
    #[serde(
        rename = "ContentViewCollection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub collection: Option<ContentViewCollection>,
}

impl WrapperDocument {
    /// Wrap a collection for persistence.
    pub fn wrap(collection: ContentViewCollection) -> Self {
        Self {
            collection: Some(collection),
        }
    }
}
