//! Value types for viewstore
//!
//! The service moves one logical aggregate: an ordered sequence of
//! per-location content views, persisted as a single wrapper document.
//!
//! # Types
//!
//! - `LocationInput` / `ProductInput`: raw assembler inputs
//! - `ContentView`: one location's assembled presentation
//! - `ContentViewCollection`: the aggregate returned to callers
//! - `WrapperDocument`: the persisted unit wrapping the aggregate

mod inputs;
mod views;
mod wrapper;

pub use inputs::{LocationInput, ProductInput};
pub use views::{ContentView, ContentViewCollection, ProductListing};
pub use wrapper::WrapperDocument;
