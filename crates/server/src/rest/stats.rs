//! Generic aggregate endpoints over either table, optionally scoped to one
//! judge or lawyer.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use shared_types::{
    AppError, Case, CaseColumn, DashboardSettings, DistinctCountResponse, FrequencyResponse,
    Hearing, HearingColumn, MeanResponse, MonthlyResponse,
};

use crate::aggregate::{count_where, distinct_count, mean_with_count, monthly_bucket_count, top_n_frequency};
use crate::dataset::DatasetCache;
use crate::filter::{filter_by_judge, filter_by_lawyer, identity};

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct CaseFrequencyParams {
    pub column: CaseColumn,
    /// Number of entries; defaults to the configured top-N.
    pub n: Option<usize>,
    /// Restrict to one judge's cases.
    pub judge: Option<String>,
}

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct HearingFrequencyParams {
    pub column: HearingColumn,
    pub n: Option<usize>,
    /// Restrict to one lawyer's hearings.
    pub lawyer: Option<String>,
}

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct JudgeScopeParams {
    pub judge: Option<String>,
}

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct HearingDistinctParams {
    pub column: HearingColumn,
    pub lawyer: Option<String>,
}

fn scope_cases<'a>(cases: &'a [Case], judge: Option<&str>) -> Vec<&'a Case> {
    match judge {
        Some(judge) => filter_by_judge(cases, judge),
        None => identity(cases),
    }
}

fn scope_hearings<'a>(hearings: &'a [Hearing], lawyer: Option<&str>) -> Vec<&'a Hearing> {
    match lawyer {
        Some(lawyer) => filter_by_lawyer(hearings, lawyer),
        None => identity(hearings),
    }
}

// ---------------------------------------------------------------------------
// GET /api/stats/cases/frequency
// ---------------------------------------------------------------------------

/// Most frequent values of a case column.
#[utoipa::path(
    get,
    path = "/api/stats/cases/frequency",
    params(CaseFrequencyParams),
    responses(
        (status = 200, description = "Top-N value counts", body = FrequencyResponse),
        (status = 503, description = "Dataset unavailable", body = AppError)
    ),
    tag = "stats"
)]
pub async fn case_frequency(
    State(datasets): State<Arc<DatasetCache>>,
    State(settings): State<Arc<DashboardSettings>>,
    Query(params): Query<CaseFrequencyParams>,
) -> Result<Json<FrequencyResponse>, AppError> {
    let ctx = datasets.get().await?;
    let rows = scope_cases(ctx.cases(), params.judge.as_deref());
    let entries = top_n_frequency(
        rows.iter().copied().map(|c| params.column.value(c)),
        params.n.unwrap_or(settings.top_n),
    );
    Ok(Json(FrequencyResponse {
        column: params.column.name().to_string(),
        entries,
        rows: rows.len(),
    }))
}

// ---------------------------------------------------------------------------
// GET /api/stats/hearings/frequency
// ---------------------------------------------------------------------------

/// Most frequent values of a hearing column.
#[utoipa::path(
    get,
    path = "/api/stats/hearings/frequency",
    params(HearingFrequencyParams),
    responses(
        (status = 200, description = "Top-N value counts", body = FrequencyResponse),
        (status = 503, description = "Dataset unavailable", body = AppError)
    ),
    tag = "stats"
)]
pub async fn hearing_frequency(
    State(datasets): State<Arc<DatasetCache>>,
    State(settings): State<Arc<DashboardSettings>>,
    Query(params): Query<HearingFrequencyParams>,
) -> Result<Json<FrequencyResponse>, AppError> {
    let ctx = datasets.get().await?;
    let rows = scope_hearings(ctx.hearings(), params.lawyer.as_deref());
    let entries = top_n_frequency(
        rows.iter().copied().map(|h| params.column.value(h)),
        params.n.unwrap_or(settings.top_n),
    );
    Ok(Json(FrequencyResponse {
        column: params.column.name().to_string(),
        entries,
        rows: rows.len(),
    }))
}

// ---------------------------------------------------------------------------
// GET /api/stats/cases/monthly
// ---------------------------------------------------------------------------

/// Cases filed per calendar month.
#[utoipa::path(
    get,
    path = "/api/stats/cases/monthly",
    params(JudgeScopeParams),
    responses(
        (status = 200, description = "Monthly filing counts, ascending", body = MonthlyResponse),
        (status = 503, description = "Dataset unavailable", body = AppError)
    ),
    tag = "stats"
)]
pub async fn monthly_filings(
    State(datasets): State<Arc<DatasetCache>>,
    Query(params): Query<JudgeScopeParams>,
) -> Result<Json<MonthlyResponse>, AppError> {
    let ctx = datasets.get().await?;
    let rows = scope_cases(ctx.cases(), params.judge.as_deref());
    Ok(Json(MonthlyResponse {
        column: "date_filed".to_string(),
        buckets: monthly_bucket_count(rows.iter().map(|c| c.date_filed)),
        excluded_rows: count_where(&rows, |c| c.date_filed.is_none()),
    }))
}

// ---------------------------------------------------------------------------
// GET /api/stats/cases/disposal-mean
// ---------------------------------------------------------------------------

/// Mean disposal time of disposed cases.
#[utoipa::path(
    get,
    path = "/api/stats/cases/disposal-mean",
    params(JudgeScopeParams),
    responses(
        (status = 200, description = "Mean disposal time in days", body = MeanResponse),
        (status = 422, description = "No disposed case has a disposal time", body = AppError),
        (status = 503, description = "Dataset unavailable", body = AppError)
    ),
    tag = "stats"
)]
pub async fn disposal_mean(
    State(datasets): State<Arc<DatasetCache>>,
    Query(params): Query<JudgeScopeParams>,
) -> Result<Json<MeanResponse>, AppError> {
    let ctx = datasets.get().await?;
    let rows = scope_cases(ctx.cases(), params.judge.as_deref());
    let (mean, sample_size) = mean_with_count(rows.iter().map(|c| c.disposal_days()))?;
    Ok(Json(MeanResponse {
        column: "disposal_time_days".to_string(),
        mean,
        sample_size,
    }))
}

// ---------------------------------------------------------------------------
// GET /api/stats/hearings/distinct
// ---------------------------------------------------------------------------

/// Number of distinct values in a hearing column.
#[utoipa::path(
    get,
    path = "/api/stats/hearings/distinct",
    params(HearingDistinctParams),
    responses(
        (status = 200, description = "Distinct value count", body = DistinctCountResponse),
        (status = 503, description = "Dataset unavailable", body = AppError)
    ),
    tag = "stats"
)]
pub async fn hearing_distinct(
    State(datasets): State<Arc<DatasetCache>>,
    Query(params): Query<HearingDistinctParams>,
) -> Result<Json<DistinctCountResponse>, AppError> {
    let ctx = datasets.get().await?;
    let rows = scope_hearings(ctx.hearings(), params.lawyer.as_deref());
    Ok(Json(DistinctCountResponse {
        column: params.column.name().to_string(),
        distinct: distinct_count(rows.iter().copied().map(|h| params.column.value(h))),
        rows: rows.len(),
    }))
}
