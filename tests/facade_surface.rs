//! Facade Surface Tests
//!
//! End-to-end behavior of the callable operations:
//! - Readiness probes are value-only and perform no storage I/O
//! - The existence probe is silent about absence, even over faults
//! - Create-then-get round-trips the assembled views in order
//! - A second create fully replaces the first (no merge)
//! - Assembly faults are caught, logged, and leave storage untouched
//! - A facade without storage serves empty data and fails writes

use std::sync::Arc;

use async_trait::async_trait;

use viewstore::assembler::{AssemblyError, AssemblyResult, BasicAssembler, ContentAssembler};
use viewstore::diagnostics::{DiagnosticEvent, MemorySink, Severity};
use viewstore::facade::DataFacade;
use viewstore::model::{ContentView, ContentViewCollection, LocationInput, ProductInput};
use viewstore::storage::{MemoryStorageClient, StorageClient};
use viewstore::store::{SingletonCollectionStore, CONTENT_VIEWS_COLLECTION};

// =============================================================================
// Test Utilities
// =============================================================================

struct Fixture {
    client: Arc<MemoryStorageClient>,
    sink: Arc<MemorySink>,
    facade: DataFacade,
}

fn fixture() -> Fixture {
    fixture_with_assembler(Arc::new(BasicAssembler::new()))
}

fn fixture_with_assembler(assembler: Arc<dyn ContentAssembler>) -> Fixture {
    let client = Arc::new(MemoryStorageClient::new("test"));
    let sink = Arc::new(MemorySink::new());
    let store =
        SingletonCollectionStore::new(client.clone() as Arc<dyn StorageClient>, sink.clone());
    let facade = DataFacade::new(store, assembler, sink.clone());
    Fixture {
        client,
        sink,
        facade,
    }
}

fn detached_fixture() -> (Arc<MemorySink>, DataFacade) {
    let sink = Arc::new(MemorySink::new());
    let facade = DataFacade::without_storage(Arc::new(BasicAssembler::new()), sink.clone());
    (sink, facade)
}

fn sample_locations() -> Vec<LocationInput> {
    vec![
        LocationInput::new("loc-1", "Harbor District"),
        LocationInput::new("loc-2", "Old Town"),
    ]
}

fn sample_products() -> Vec<ProductInput> {
    vec![
        ProductInput::new("prod-1", "Coffee"),
        ProductInput::new("prod-2", "Tea"),
    ]
}

/// Assembler that always faults, for exercising the catch path.
struct FailingAssembler;

#[async_trait]
impl ContentAssembler for FailingAssembler {
    async fn assemble(
        &self,
        _locations: &[LocationInput],
        _products: &[ProductInput],
    ) -> AssemblyResult<Vec<ContentView>> {
        Err(AssemblyError::SourceUnavailable(
            "catalog offline".to_string(),
        ))
    }
}

// =============================================================================
// Readiness
// =============================================================================

#[tokio::test]
async fn test_service_ready_regardless_of_storage() {
    let f = fixture();
    assert!(f.facade.is_service_ready());

    let (_sink, detached) = detached_fixture();
    assert!(detached.is_service_ready());
}

#[tokio::test]
async fn test_storage_ready_reflects_configuration_only() {
    let f = fixture();
    // Storage readiness is configuration presence, not reachability.
    f.client.fail_database();
    assert!(f.facade.is_storage_ready());
    assert!(f.sink.is_empty(), "the probe must perform no storage I/O");
}

// =============================================================================
// Existence probe
// =============================================================================

#[tokio::test]
async fn test_has_data_on_empty_store_is_false_and_silent() {
    let f = fixture();
    assert!(!f.facade.has_data().await);
    assert!(f.sink.is_empty());
}

#[tokio::test]
async fn test_has_data_suppresses_transport_fault() {
    let f = fixture();
    f.client.fail_next_find();

    assert!(!f.facade.has_data().await);
    assert!(
        f.sink.is_empty(),
        "the existence probe must stay quiet over a transport fault"
    );

    // The same fault through the getter is logged at info level.
    f.client.fail_next_find();
    let result = f.facade.get_data().await;
    assert_eq!(result, ContentViewCollection::empty());
    assert_eq!(f.sink.events_at(Severity::Info).len(), 1);
    assert!(f.sink.events_at(Severity::Error).is_empty());
}

#[tokio::test]
async fn test_has_data_false_for_present_but_empty_sequence() {
    let f = fixture();
    assert!(f.facade.create_data(vec![], vec![]).await);

    assert!(
        !f.facade.has_data().await,
        "an empty view sequence does not count as data"
    );
}

// =============================================================================
// Create and get
// =============================================================================

#[tokio::test]
async fn test_create_then_get_round_trips_views_in_order() {
    let f = fixture();

    assert!(
        f.facade
            .create_data(sample_locations(), sample_products())
            .await
    );

    let result = f.facade.get_data().await;
    let views = result.views.expect("views must be present after create");
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].location_id, "loc-1");
    assert_eq!(views[1].location_id, "loc-2");

    let product_ids: Vec<&str> = views[0].products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(product_ids, vec!["prod-1", "prod-2"]);
    assert!(f.sink.is_empty());
}

#[tokio::test]
async fn test_second_create_fully_replaces_first() {
    let f = fixture();

    assert!(
        f.facade
            .create_data(sample_locations(), sample_products())
            .await
    );
    assert!(
        f.facade
            .create_data(
                vec![LocationInput::new("loc-9", "Riverside")],
                vec![ProductInput::new("prod-9", "Cocoa")],
            )
            .await
    );

    let views = f.facade.get_data().await.views.unwrap();
    assert_eq!(views.len(), 1, "none of the first payload may remain");
    assert_eq!(views[0].location_id, "loc-9");
    assert_eq!(views[0].products[0].id, "prod-9");
}

#[tokio::test]
async fn test_create_persists_exactly_one_wrapper_document() {
    let f = fixture();

    assert!(
        f.facade
            .create_data(sample_locations(), sample_products())
            .await
    );
    assert!(
        f.facade
            .create_data(sample_locations(), sample_products())
            .await
    );

    assert_eq!(f.client.collection(CONTENT_VIEWS_COLLECTION).len(), 1);
}

#[tokio::test]
async fn test_get_data_never_faults_on_degraded_storage() {
    let f = fixture();
    f.client.fail_database();

    let result = f.facade.get_data().await;

    assert_eq!(result, ContentViewCollection::empty());
}

// =============================================================================
// Assembly faults
// =============================================================================

#[tokio::test]
async fn test_assembly_fault_is_caught_and_storage_untouched() {
    let f = fixture_with_assembler(Arc::new(FailingAssembler));

    let created = f
        .facade
        .create_data(sample_locations(), sample_products())
        .await;

    assert!(!created);
    let errors = f.sink.events_at(Severity::Error);
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], DiagnosticEvent::AssemblyFault { .. }));
    assert!(
        f.client.collection(CONTENT_VIEWS_COLLECTION).is_empty(),
        "assembly runs before storage access; nothing may be deleted or written"
    );
}

#[tokio::test]
async fn test_assembly_fault_does_not_destroy_existing_data() {
    let seeded = fixture();
    assert!(
        seeded
            .facade
            .create_data(sample_locations(), sample_products())
            .await
    );

    // Rebuild the facade over the same client with a failing assembler.
    let sink = Arc::new(MemorySink::new());
    let store = SingletonCollectionStore::new(
        seeded.client.clone() as Arc<dyn StorageClient>,
        sink.clone(),
    );
    let facade = DataFacade::new(store, Arc::new(FailingAssembler), sink);

    assert!(!facade.create_data(vec![], vec![]).await);
    assert!(
        facade.has_data().await,
        "the previously stored aggregate must survive a failed create"
    );
}

// =============================================================================
// Without storage
// =============================================================================

#[tokio::test]
async fn test_detached_facade_serves_empty_data() {
    let (sink, facade) = detached_fixture();

    assert!(!facade.is_storage_ready());
    assert!(!facade.has_data().await);
    assert_eq!(facade.get_data().await, ContentViewCollection::empty());
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_detached_facade_fails_create_with_diagnostic() {
    let (sink, facade) = detached_fixture();

    let created = facade
        .create_data(sample_locations(), sample_products())
        .await;

    assert!(!created);
    assert_eq!(sink.events_at(Severity::Error).len(), 1);
}
