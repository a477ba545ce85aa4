use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use shared_types::{AppError, DashboardSettings, EntityList, Role};

use crate::dataset::DatasetCache;
use crate::filter::{distinct_judges, distinct_lawyers};

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct LawyerListParams {
    /// Maximum names returned; defaults to the configured picker limit.
    pub limit: Option<usize>,
}

/// GET /api/judges
#[utoipa::path(
    get,
    path = "/api/judges",
    responses(
        (status = 200, description = "Judge names in first-seen order", body = EntityList),
        (status = 503, description = "Dataset unavailable", body = AppError)
    ),
    tag = "entities"
)]
pub async fn list_judges(
    State(datasets): State<Arc<DatasetCache>>,
) -> Result<Json<EntityList>, AppError> {
    let ctx = datasets.get().await?;
    let names = distinct_judges(ctx.cases());
    Ok(Json(EntityList {
        role: Role::Judge,
        total: names.len(),
        names,
    }))
}

/// GET /api/lawyers
#[utoipa::path(
    get,
    path = "/api/lawyers",
    params(LawyerListParams),
    responses(
        (status = 200, description = "Lawyer names in first-seen order", body = EntityList),
        (status = 503, description = "Dataset unavailable", body = AppError)
    ),
    tag = "entities"
)]
pub async fn list_lawyers(
    State(datasets): State<Arc<DatasetCache>>,
    State(settings): State<Arc<DashboardSettings>>,
    Query(params): Query<LawyerListParams>,
) -> Result<Json<EntityList>, AppError> {
    let ctx = datasets.get().await?;
    let mut names = distinct_lawyers(ctx.hearings());
    let total = names.len();
    names.truncate(params.limit.unwrap_or(settings.lawyer_picker_limit));
    Ok(Json(EntityList {
        role: Role::Lawyer,
        names,
        total,
    }))
}
