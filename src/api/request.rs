//! API request types.

use serde::{Deserialize, Serialize};

use crate::model::{LocationInput, ProductInput};

/// Body of the create operation: the raw inputs handed to the content
/// assembler. Both sequences default to empty when omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateContentViewsRequest {
    /// Locations to build views for, in presentation order.
    #[serde(default)]
    pub locations: Vec<LocationInput>,

    /// Products available for presentation, in presentation order.
    #[serde(default)]
    pub products: Vec<ProductInput>,
}
