use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use crate::dataset::DatasetCache;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// `loaded` once both tables are cached, `not_loaded` before that.
    pub datasets: String,
    pub case_rows: usize,
    pub hearing_rows: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Health check handler. Never triggers a dataset load.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(datasets): State<Arc<DatasetCache>>) -> Json<HealthResponse> {
    let (datasets, case_rows, hearing_rows) = match datasets.loaded() {
        Some(ctx) => ("loaded", ctx.cases().len(), ctx.hearings().len()),
        None => ("not_loaded", 0, 0),
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        datasets: datasets.to_string(),
        case_rows,
        hearing_rows,
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
