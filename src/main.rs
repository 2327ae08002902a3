//! plan-catalog server binary.
//!
//! Loads configuration, wires the Firestore REST store into the plan
//! endpoints, and serves the axum router.

use std::sync::Arc;
use std::time::Duration;

use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use plan_catalog::adapters::http::plans::{plans_router, PlansAppState};
use plan_catalog::adapters::store::{FirestoreConfig, FirestoreRestStore};
use plan_catalog::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let store_config = FirestoreConfig::new(&config.store.project_id)
        .with_base_url(&config.store.base_url)
        .with_database(&config.store.database)
        .with_collection(&config.store.collection)
        .with_timeout(config.store.request_timeout())
        .with_readiness_budget(
            config.store.readiness_probes,
            config.store.readiness_interval(),
        );
    let store = Arc::new(FirestoreRestStore::new(store_config));
    let state = PlansAppState::new(store);

    let app = plans_router()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server))
        .with_state(state);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, environment = ?config.server.environment, "plan-catalog listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Read-only API: only GET needs to cross origins. Without configured
/// origins the layer stays permissive for local development.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET])
    }
}
