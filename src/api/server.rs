//! HTTP server exposing the facade operations.

use std::io;
use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServiceConfig;
use crate::facade::DataFacade;
use crate::model::ContentViewCollection;

use super::request::CreateContentViewsRequest;

/// Shared state type
type ServerState = Arc<DataFacade>;

/// API server wrapping the facade.
pub struct ApiServer {
    config: ServiceConfig,
    router: Router,
}

impl ApiServer {
    /// Create a server over the given facade.
    pub fn new(facade: Arc<DataFacade>, config: ServiceConfig) -> Self {
        Self {
            config,
            router: Self::build_router(facade),
        }
    }

    /// Build the Axum router. Exposed separately so tests can drive
    /// the routes without binding a socket.
    pub fn build_router(facade: Arc<DataFacade>) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/api/v1/service/ready", get(service_ready))
            .route("/api/v1/storage/ready", get(storage_ready))
            .route("/api/v1/content-views/exists", get(content_views_exist))
            .route(
                "/api/v1/content-views",
                get(get_content_views).post(create_content_views),
            )
            .layer(cors)
            .with_state(facade)
    }

    /// The configured bind address.
    pub fn bind_addr(&self) -> String {
        self.config.bind_addr()
    }

    /// Bind the listener and serve until shutdown.
    pub async fn start(self) -> io::Result<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).await?;
        println!("viewstore serving on http://{}", addr);
        axum::serve(listener, self.router).await
    }
}

/// Service liveness, independent of storage.
async fn service_ready(State(facade): State<ServerState>) -> Json<bool> {
    Json(facade.is_service_ready())
}

/// Whether storage is configured. No I/O.
async fn storage_ready(State(facade): State<ServerState>) -> Json<bool> {
    Json(facade.is_storage_ready())
}

/// Existence probe; absence stays quiet.
async fn content_views_exist(State(facade): State<ServerState>) -> Json<bool> {
    Json(facade.has_data().await)
}

/// Fetch the aggregate. Never an error response: absent or degraded
/// storage state serves an empty collection.
async fn get_content_views(State(facade): State<ServerState>) -> Json<ContentViewCollection> {
    Json(facade.get_data().await)
}

/// Assemble and fully replace the aggregate. The boolean is the only
/// outcome channel; failures are visible in diagnostics.
async fn create_content_views(
    State(facade): State<ServerState>,
    Json(request): Json<CreateContentViewsRequest>,
) -> Json<bool> {
    Json(
        facade
            .create_data(request.locations, request.products)
            .await,
    )
}
