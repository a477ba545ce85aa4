use shared_types::{
    AdminDashboard, BarOrientation, Case, DashboardSettings, Hearing, HearingColumn,
    LongPendingRow,
};

use super::present::{bar_chart, days_label, line_chart, metric};
use crate::aggregate::{count_where, mean, monthly_bucket_count, top_n_frequency};
use crate::filter::identity;

/// Court-wide overview built from both tables.
pub fn admin_dashboard(
    cases: &[Case],
    hearings: &[Hearing],
    settings: &DashboardSettings,
) -> AdminDashboard {
    let cases = identity(cases);
    let hearings = identity(hearings);

    let total_cases = cases.len();
    let pending_cases = count_where(&cases, |c| c.is_pending());
    let disposed_cases = count_where(&cases, |c| c.is_disposed());
    let avg_disposal_days = mean(cases.iter().map(|c| c.disposal_days())).ok();

    let bottlenecks = top_n_frequency(
        hearings.iter().copied().map(|h| HearingColumn::RemappedStage.value(h)),
        settings.top_n,
    );

    let buckets = monthly_bucket_count(cases.iter().map(|c| c.date_filed));
    let undated = count_where(&cases, |c| c.date_filed.is_none());

    let (long_pending, long_pending_total) =
        long_pending_cases(&cases, settings.long_pending_days, settings.table_rows);

    AdminDashboard {
        total_cases,
        pending_cases,
        disposed_cases,
        avg_disposal_days,
        metrics: vec![
            metric("Total Cases", total_cases),
            metric("Pending", pending_cases),
            metric("Disposed", disposed_cases),
            metric("Avg Disposal Time", days_label(avg_disposal_days)),
        ],
        bottlenecks: bar_chart(
            "Cases by Stage (Identify Bottlenecks)",
            "Stage",
            "Number of Cases",
            BarOrientation::Horizontal,
            bottlenecks,
        ),
        filing_trend: line_chart("Case Filing Trend", "Month", "Cases Filed", buckets, undated),
        long_pending,
        long_pending_total,
    }
}

/// Cases older than `threshold` days by `DISPOSALTIME_ADJ`, longest first.
/// Returns at most `limit` rows plus the number that qualified.
fn long_pending_cases(
    cases: &[&Case],
    threshold: f64,
    limit: usize,
) -> (Vec<LongPendingRow>, usize) {
    let mut flagged: Vec<(&Case, f64)> = cases
        .iter()
        .filter_map(|c| c.disposal_time_days.map(|days| (*c, days)))
        .filter(|(_, days)| *days > threshold)
        .collect();
    let total = flagged.len();

    // Stable sort keeps source order among equal ages.
    flagged.sort_by(|a, b| b.1.total_cmp(&a.1));

    let rows = flagged
        .into_iter()
        .take(limit)
        .map(|(c, days)| LongPendingRow {
            case_number: c.case_number.clone(),
            case_type: c.case_type.clone(),
            date_filed: c.date_filed,
            disposal_time_days: days,
            judge_name: c.judge_name.clone(),
        })
        .collect();
    (rows, total)
}
