use std::time::Duration;

use server::dataset::{DatasetCache, DatasetSources};
use server::notes::InMemoryNoteStore;
use server::state::AppState;

#[tokio::main]
async fn main() {
    server::telemetry::init_tracing();

    let config = server::config::load_config();
    if config.features.telemetry {
        server::telemetry::init_telemetry();
    }
    server::health::record_start_time();

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(config.datasets.fetch_timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            std::process::exit(1);
        }
    };

    let datasets = DatasetCache::new(client, DatasetSources::from_config(&config.datasets));
    if config.features.preload {
        // Failure is not fatal; the first request retries the load.
        if let Err(e) = datasets.get().await {
            tracing::warn!(error = %e, "Dataset preload failed");
        }
    }

    let state = AppState::new(datasets, InMemoryNoteStore::new(), config.dashboard.clone());

    let mut router = server::openapi::app_router(state);
    if config.features.telemetry {
        router = router.layer(server::telemetry::OtelTraceLayer);
    }
    let router = router
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
        .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
            tower_http::request_id::MakeRequestUuid,
        ));

    let listener = match tokio::net::TcpListener::bind(&config.server.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.server.bind_addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!(addr = %config.server.bind_addr, "Caseboard listening");

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
