pub mod dashboard;
pub mod entities;
pub mod notes;
pub mod stats;

use axum::{routing::get, Router};
use crate::state::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Entity pickers
        .route("/api/judges", get(entities::list_judges))
        .route("/api/lawyers", get(entities::list_lawyers))
        // Dashboards
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/dashboard/judge", get(dashboard::get_judge_dashboard))
        .route("/api/dashboard/lawyer", get(dashboard::get_lawyer_dashboard))
        .route("/api/dashboard/admin", get(dashboard::get_admin_dashboard))
        // Statistics
        .route("/api/stats/cases/frequency", get(stats::case_frequency))
        .route("/api/stats/cases/monthly", get(stats::monthly_filings))
        .route("/api/stats/cases/disposal-mean", get(stats::disposal_mean))
        .route("/api/stats/hearings/frequency", get(stats::hearing_frequency))
        .route("/api/stats/hearings/distinct", get(stats::hearing_distinct))
        // Notes
        .route("/api/notes", get(notes::list_notes).post(notes::save_note))
}
