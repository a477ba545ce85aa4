use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use shared_types::{
    AdminDashboard, AppError, DashboardResponse, DashboardSettings, JudgeDashboard,
    LawyerDashboard, Role,
};

use crate::dataset::DatasetCache;
use crate::views::{self, ViewMode};

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct DashboardParams {
    /// `judge`, `lawyer` or `administrator` (alias `admin`).
    pub role: Role,
    /// Judge or lawyer name; defaults to the first picker entry.
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct EntityNameParams {
    /// Defaults to the first picker entry.
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// GET /api/dashboard
// ---------------------------------------------------------------------------

/// Dashboard for any role, tagged with the role it was built for.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    params(DashboardParams),
    responses(
        (status = 200, description = "Role dashboard", body = DashboardResponse),
        (status = 404, description = "No entities available for the role", body = AppError),
        (status = 503, description = "Dataset unavailable", body = AppError)
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(
    State(datasets): State<Arc<DatasetCache>>,
    State(settings): State<Arc<DashboardSettings>>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardResponse>, AppError> {
    let ctx = datasets.get().await?;
    let mode = ViewMode::resolve(&ctx, params.role, params.name.as_deref())?;
    tracing::debug!(role = mode.role().as_str(), ?mode, "Rendering dashboard");
    Ok(Json(views::render(&ctx, &mode, &settings)))
}

// ---------------------------------------------------------------------------
// GET /api/dashboard/judge
// ---------------------------------------------------------------------------

/// Caseload of one judge.
#[utoipa::path(
    get,
    path = "/api/dashboard/judge",
    params(EntityNameParams),
    responses(
        (status = 200, description = "Judge dashboard", body = JudgeDashboard),
        (status = 404, description = "No judges in the case data", body = AppError),
        (status = 503, description = "Dataset unavailable", body = AppError)
    ),
    tag = "dashboard"
)]
pub async fn get_judge_dashboard(
    State(datasets): State<Arc<DatasetCache>>,
    State(settings): State<Arc<DashboardSettings>>,
    Query(params): Query<EntityNameParams>,
) -> Result<Json<JudgeDashboard>, AppError> {
    let ctx = datasets.get().await?;
    match ViewMode::resolve(&ctx, Role::Judge, params.name.as_deref())? {
        ViewMode::Judge(judge) => Ok(Json(views::judge_dashboard(ctx.cases(), &judge, &settings))),
        _ => Err(AppError::internal("Judge view resolved to another role")),
    }
}

// ---------------------------------------------------------------------------
// GET /api/dashboard/lawyer
// ---------------------------------------------------------------------------

/// Hearings of one petitioner advocate.
#[utoipa::path(
    get,
    path = "/api/dashboard/lawyer",
    params(EntityNameParams),
    responses(
        (status = 200, description = "Lawyer dashboard", body = LawyerDashboard),
        (status = 404, description = "No lawyers in the hearing data", body = AppError),
        (status = 503, description = "Dataset unavailable", body = AppError)
    ),
    tag = "dashboard"
)]
pub async fn get_lawyer_dashboard(
    State(datasets): State<Arc<DatasetCache>>,
    State(settings): State<Arc<DashboardSettings>>,
    Query(params): Query<EntityNameParams>,
) -> Result<Json<LawyerDashboard>, AppError> {
    let ctx = datasets.get().await?;
    match ViewMode::resolve(&ctx, Role::Lawyer, params.name.as_deref())? {
        ViewMode::Lawyer(lawyer) => Ok(Json(views::lawyer_dashboard(
            ctx.hearings(),
            &lawyer,
            &settings,
        ))),
        _ => Err(AppError::internal("Lawyer view resolved to another role")),
    }
}

// ---------------------------------------------------------------------------
// GET /api/dashboard/admin
// ---------------------------------------------------------------------------

/// Court-wide overview.
#[utoipa::path(
    get,
    path = "/api/dashboard/admin",
    responses(
        (status = 200, description = "Administrator dashboard", body = AdminDashboard),
        (status = 503, description = "Dataset unavailable", body = AppError)
    ),
    tag = "dashboard"
)]
pub async fn get_admin_dashboard(
    State(datasets): State<Arc<DatasetCache>>,
    State(settings): State<Arc<DashboardSettings>>,
) -> Result<Json<AdminDashboard>, AppError> {
    let ctx = datasets.get().await?;
    Ok(Json(views::admin_dashboard(ctx.cases(), ctx.hearings(), &settings)))
}
