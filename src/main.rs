use anyhow::Context;
use axum::http::HeaderValue;
use axum::{
    Extension, Router,
    routing::{get, post},
};
use building_search::bridge::client::BridgeClient;
use building_search::bridge::handlers::handle_generate_model;
use building_search::config::Config;
use building_search::dataset::loader::load_dataset;
use building_search::search::handlers::{
    handle_building_by_address, handle_get_building, handle_health, handle_search,
};
use building_search::search::index::SearchIndex;
use clap::Parser;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting building search on {}", config.bind);

    // 1. Dataset and index, fully built before anything is served:
    let records = load_dataset(&config.data_file).await?;
    let index = Arc::new(SearchIndex::build(records));
    tracing::info!("Search index ready with {} buildings", index.len());

    // 2. Bridge client:
    let bridge = Arc::new(BridgeClient::new(
        config.bridge_url.clone(),
        config.bridge_timeout(),
    ));
    tracing::info!(
        "Model generation bridge at {} (timeout {:?})",
        bridge.url(),
        bridge.timeout()
    );

    // 3. HTTP Router:
    let app = Router::new()
        .route("/health", get(handle_health))
        .route("/search", get(handle_search))
        .route("/building", get(handle_get_building))
        .route("/building_by_address", get(handle_building_by_address))
        .route("/generate_model", post(handle_generate_model::<BridgeClient>))
        .layer(Extension(index))
        .layer(Extension(bridge))
        .layer(cors_layer(&config.cors_origins)?)
        .layer(TraceLayer::new_for_http());

    // 4. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;

    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
