//! Raw inputs consumed by the content assembler
//!
//! These arrive from callers of the create operation and are never
//! persisted as-is; the assembler maps them into content views.

use serde::{Deserialize, Serialize};

/// A location to build a content view for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInput {
    /// Stable location identifier.
    pub id: String,

    /// Display title.
    pub title: String,
}

impl LocationInput {
    /// Create a new location input.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// A product available for presentation at locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    /// Stable product identifier.
    pub id: String,

    /// Display title.
    pub title: String,
}

impl ProductInput {
    /// Create a new product input.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
