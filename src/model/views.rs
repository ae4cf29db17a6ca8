//! Content view aggregate types
//!
//! Persisted field names are PascalCase to match the stored document
//! layout shared with existing readers; the inner view sequence is
//! optional, and an absent sequence is a meaningful state (no data).

use serde::{Deserialize, Serialize};

/// One product entry inside a location's content view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductListing {
    /// Stable product identifier.
    pub id: String,

    /// Display title.
    pub title: String,
}

/// One location's assembled content presentation.
///
/// The store and facade treat this as an opaque record; only the
/// assembler and the API layer look inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentView {
    /// The location this view presents.
    pub location_id: String,

    /// Display title for the location.
    pub title: String,

    /// Ordered product listings for this location.
    pub products: Vec<ProductListing>,
}

/// The aggregate returned to callers: an ordered sequence of content
/// views, or no sequence at all.
///
/// `views: None` means "no data"; `Some(vec![])` is a present but empty
/// sequence. Callers that only care about usable data should go through
/// `has_views`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentViewCollection {
    /// The view sequence, absent when no data exists.
    #[serde(
        rename = "ContentViews",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub views: Option<Vec<ContentView>>,
}

impl ContentViewCollection {
    /// A collection with an absent view sequence.
    pub fn empty() -> Self {
        Self { views: None }
    }

    /// A collection holding the given views.
    pub fn of(views: Vec<ContentView>) -> Self {
        Self { views: Some(views) }
    }

    /// Whether a non-empty view sequence is present.
    pub fn has_views(&self) -> bool {
        self.views.as_ref().is_some_and(|v| !v.is_empty())
    }
}
