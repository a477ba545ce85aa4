use axum::Router;
use shared_types::{
    AdminDashboard, AppError, AppErrorKind, Bar, BarChart, BarOrientation, CaseColumn, CaseRow,
    DashboardResponse, DistinctCountResponse, EntityList, FrequencyResponse, HearingColumn,
    HearingRow, JudgeDashboard, LawyerDashboard, LineChart, LinePoint, LongPendingRow,
    MeanResponse, MetricCard, MonthCount, MonthlyResponse, NoteResponse, Role, SaveNoteRequest,
    SaveNoteResponse, ValueCount,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest;
use crate::state::AppState;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        // Entity pickers
        rest::entities::list_judges,
        rest::entities::list_lawyers,
        // Dashboards
        rest::dashboard::get_dashboard,
        rest::dashboard::get_judge_dashboard,
        rest::dashboard::get_lawyer_dashboard,
        rest::dashboard::get_admin_dashboard,
        // Statistics
        rest::stats::case_frequency,
        rest::stats::hearing_frequency,
        rest::stats::monthly_filings,
        rest::stats::disposal_mean,
        rest::stats::hearing_distinct,
        // Notes
        rest::notes::save_note,
        rest::notes::list_notes,
        // Health
        health::health_check,
    ),
    components(schemas(
        AppError, AppErrorKind,
        Role, EntityList,
        DashboardResponse, JudgeDashboard, LawyerDashboard, AdminDashboard,
        MetricCard, BarChart, Bar, BarOrientation, LineChart, LinePoint,
        CaseRow, HearingRow, LongPendingRow,
        CaseColumn, HearingColumn, ValueCount, MonthCount,
        FrequencyResponse, MonthlyResponse, MeanResponse, DistinctCountResponse,
        SaveNoteRequest, SaveNoteResponse, NoteResponse,
        health::HealthResponse,
    )),
    tags(
        (name = "entities", description = "Judge and lawyer pickers"),
        (name = "dashboard", description = "Role-scoped dashboards"),
        (name = "stats", description = "Aggregates over the case and hearing tables"),
        (name = "notes", description = "Lawyer notes on their cases"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Caseboard API",
        description = "Role-based court case analytics over NJDG case and hearing exports",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`,
/// the health check at `/health` and the REST API at `/api/*`.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
