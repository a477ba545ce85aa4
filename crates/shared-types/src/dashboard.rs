use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::records::{Case, Hearing};

// ── Roles ───────────────────────────────────────────────────────────

/// The three kinds of dashboard user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Judge,
    Lawyer,
    #[serde(alias = "admin")]
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Judge => "judge",
            Role::Lawyer => "lawyer",
            Role::Administrator => "administrator",
        }
    }
}

// ── Aggregate outputs ───────────────────────────────────────────────

/// A value and the number of rows that carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Number of rows whose date falls in the month starting at `month`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MonthCount {
    pub month: NaiveDate,
    pub count: usize,
}

// ── Presentation shapes ─────────────────────────────────────────────

/// A labelled scalar, already formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MetricCard {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum BarOrientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Bar {
    pub label: String,
    pub value: usize,
}

/// Categorical bar chart data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BarChart {
    pub title: String,
    /// Axis label for the categories.
    pub category_label: String,
    /// Axis label for the counts.
    pub value_label: String,
    pub orientation: BarOrientation,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LinePoint {
    pub x: NaiveDate,
    pub y: usize,
}

/// Time-series line chart data, points ordered by `x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<LinePoint>,
    /// Rows left out because their date was missing or unparseable.
    pub excluded_rows: usize,
}

/// Case row as shown in the judge's case table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseRow {
    pub case_number: String,
    pub case_type: Option<String>,
    pub status: Option<String>,
    pub date_filed: Option<NaiveDate>,
    pub decision_date: Option<NaiveDate>,
}

impl From<&Case> for CaseRow {
    fn from(c: &Case) -> Self {
        Self {
            case_number: c.case_number.clone(),
            case_type: c.case_type.clone(),
            status: c.status.as_ref().map(|s| s.as_str().to_string()),
            date_filed: c.date_filed,
            decision_date: c.decision_date,
        }
    }
}

/// Hearing row as shown in the lawyer's case list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HearingRow {
    pub case_id: Option<String>,
    pub hearing_date: Option<NaiveDate>,
    pub current_stage: Option<String>,
    pub remapped_stage: Option<String>,
}

impl From<&Hearing> for HearingRow {
    fn from(h: &Hearing) -> Self {
        Self {
            case_id: h.case_id.clone(),
            hearing_date: h.hearing_date,
            current_stage: h.current_stage.clone(),
            remapped_stage: h.remapped_stage.clone(),
        }
    }
}

/// Case row in the administrator's long-pending priority table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LongPendingRow {
    pub case_number: String,
    pub case_type: Option<String>,
    pub date_filed: Option<NaiveDate>,
    pub disposal_time_days: f64,
    pub judge_name: Option<String>,
}

// ── Role dashboards ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct JudgeDashboard {
    pub judge_name: String,
    pub total_cases: usize,
    pub pending_cases: usize,
    pub disposed_cases: usize,
    pub metrics: Vec<MetricCard>,
    pub case_type_distribution: BarChart,
    /// First rows of the judge's cases, in source order.
    pub recent_cases: Vec<CaseRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LawyerDashboard {
    pub lawyer_name: String,
    /// Distinct case identifiers among the lawyer's hearings.
    pub active_cases: usize,
    pub total_hearings: usize,
    pub metrics: Vec<MetricCard>,
    /// Distinct case identifiers in first-seen order; the note selector.
    pub case_ids: Vec<String>,
    pub hearings: Vec<HearingRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminDashboard {
    pub total_cases: usize,
    pub pending_cases: usize,
    pub disposed_cases: usize,
    /// Mean disposal time over disposed cases; `None` when there are none.
    pub avg_disposal_days: Option<f64>,
    pub metrics: Vec<MetricCard>,
    pub bottlenecks: BarChart,
    pub filing_trend: LineChart,
    pub long_pending: Vec<LongPendingRow>,
    /// Number of long-pending cases before truncation.
    pub long_pending_total: usize,
}

/// Dashboard for any role, tagged with the role it was built for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum DashboardResponse {
    Judge(JudgeDashboard),
    Lawyer(LawyerDashboard),
    Administrator(AdminDashboard),
}

impl DashboardResponse {
    pub fn role(&self) -> Role {
        match self {
            DashboardResponse::Judge(_) => Role::Judge,
            DashboardResponse::Lawyer(_) => Role::Lawyer,
            DashboardResponse::Administrator(_) => Role::Administrator,
        }
    }
}

// ── Entity pickers ──────────────────────────────────────────────────

/// Names offered by a role's entity selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EntityList {
    pub role: Role,
    pub names: Vec<String>,
    /// Distinct names available before any limit was applied.
    pub total: usize,
}

// ── Statistics responses ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FrequencyResponse {
    pub column: String,
    pub entries: Vec<ValueCount>,
    /// Rows in the filtered table, including those with a missing value.
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MonthlyResponse {
    pub column: String,
    pub buckets: Vec<MonthCount>,
    pub excluded_rows: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MeanResponse {
    pub column: String,
    pub mean: f64,
    pub sample_size: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DistinctCountResponse {
    pub column: String,
    pub distinct: usize,
    pub rows: usize,
}
