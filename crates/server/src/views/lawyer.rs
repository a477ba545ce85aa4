use shared_types::{DashboardSettings, Hearing, LawyerDashboard};

use super::present::{metric, table};
use crate::aggregate::distinct_values;
use crate::filter::filter_by_lawyer;

/// Hearing overview for one petitioner advocate.
pub fn lawyer_dashboard(
    hearings: &[Hearing],
    lawyer: &str,
    settings: &DashboardSettings,
) -> LawyerDashboard {
    let subset = filter_by_lawyer(hearings, lawyer);

    // Distinct CNR numbers double as the active case count.
    let case_ids = distinct_values(subset.iter().copied().map(|h| h.case_id.as_deref()));
    let active_cases = case_ids.len();
    let total_hearings = subset.len();

    LawyerDashboard {
        lawyer_name: lawyer.to_string(),
        active_cases,
        total_hearings,
        metrics: vec![
            metric("Active Cases", active_cases),
            metric("Total Hearings", total_hearings),
        ],
        case_ids,
        hearings: table(subset.iter().copied(), settings.table_rows),
    }
}
