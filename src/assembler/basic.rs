//! Basic content assembler
//!
//! Deterministic mapping: one view per location in input order, every
//! product listed in input order at every location.

use async_trait::async_trait;

use crate::model::{ContentView, LocationInput, ProductInput, ProductListing};

use super::{AssemblyResult, ContentAssembler};

/// The default assembler.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicAssembler;

impl BasicAssembler {
    /// Create a new basic assembler.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentAssembler for BasicAssembler {
    async fn assemble(
        &self,
        locations: &[LocationInput],
        products: &[ProductInput],
    ) -> AssemblyResult<Vec<ContentView>> {
        let listings: Vec<ProductListing> = products
            .iter()
            .map(|product| ProductListing {
                id: product.id.clone(),
                title: product.title.clone(),
            })
            .collect();

        Ok(locations
            .iter()
            .map(|location| ContentView {
                location_id: location.id.clone(),
                title: location.title.clone(),
                products: listings.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_one_view_per_location_in_order() {
        let locations = vec![
            LocationInput::new("loc-1", "Harbor District"),
            LocationInput::new("loc-2", "Old Town"),
        ];
        let products = vec![ProductInput::new("prod-1", "Coffee")];

        let views = BasicAssembler::new()
            .assemble(&locations, &products)
            .await
            .unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].location_id, "loc-1");
        assert_eq!(views[1].location_id, "loc-2");
    }

    #[tokio::test]
    async fn test_products_preserved_in_order_at_every_location() {
        let locations = vec![LocationInput::new("loc-1", "Harbor District")];
        let products = vec![
            ProductInput::new("prod-2", "Tea"),
            ProductInput::new("prod-1", "Coffee"),
        ];

        let views = BasicAssembler::new()
            .assemble(&locations, &products)
            .await
            .unwrap();

        let ids: Vec<&str> = views[0].products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["prod-2", "prod-1"]);
    }

    #[tokio::test]
    async fn test_no_locations_yields_empty_sequence() {
        let views = BasicAssembler::new()
            .assemble(&[], &[ProductInput::new("prod-1", "Coffee")])
            .await
            .unwrap();
        assert!(views.is_empty());
    }
}
