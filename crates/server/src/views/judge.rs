use shared_types::{BarOrientation, Case, CaseColumn, DashboardSettings, JudgeDashboard};

use super::present::{bar_chart, metric, table};
use crate::aggregate::{count_where, top_n_frequency};
use crate::filter::filter_by_judge;

/// Workload overview for one judge.
pub fn judge_dashboard(cases: &[Case], judge: &str, settings: &DashboardSettings) -> JudgeDashboard {
    let subset = filter_by_judge(cases, judge);

    let total_cases = subset.len();
    let pending_cases = count_where(&subset, |c| c.is_pending());
    let disposed_cases = count_where(&subset, |c| c.is_disposed());

    let case_types = top_n_frequency(
        subset.iter().copied().map(|c| CaseColumn::CaseType.value(c)),
        settings.top_n,
    );

    JudgeDashboard {
        judge_name: judge.to_string(),
        total_cases,
        pending_cases,
        disposed_cases,
        metrics: vec![
            metric("Total Cases", total_cases),
            metric("Pending Cases", pending_cases),
            metric("Disposed Cases", disposed_cases),
        ],
        case_type_distribution: bar_chart(
            "Case Type Distribution",
            "Case Type",
            "Count",
            BarOrientation::Vertical,
            case_types,
        ),
        recent_cases: table(subset.iter().copied(), settings.table_rows),
    }
}
