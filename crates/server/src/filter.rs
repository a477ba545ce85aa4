//! Role-scoped row selection.
//!
//! Filters borrow from the shared tables; the subsets live only as long as
//! the request that built them.

use shared_types::{Case, Hearing};

use crate::aggregate::distinct_values;

/// Cases whose judge is exactly `judge`. Unknown names give an empty subset.
pub fn filter_by_judge<'a>(cases: &'a [Case], judge: &str) -> Vec<&'a Case> {
    cases
        .iter()
        .filter(|c| c.judge_name.as_deref() == Some(judge))
        .collect()
}

/// Hearings whose petitioner advocate is exactly `lawyer`.
pub fn filter_by_lawyer<'a>(hearings: &'a [Hearing], lawyer: &str) -> Vec<&'a Hearing> {
    hearings
        .iter()
        .filter(|h| h.petitioner_advocate.as_deref() == Some(lawyer))
        .collect()
}

/// The administrator sees every row.
pub fn identity<T>(rows: &[T]) -> Vec<&T> {
    rows.iter().collect()
}

/// Judge names present in the case table, first-seen order.
pub fn distinct_judges(cases: &[Case]) -> Vec<String> {
    distinct_values(cases.iter().map(|c| c.judge_name.as_deref()))
}

/// Lawyer names present in the hearing table, first-seen order.
pub fn distinct_lawyers(hearings: &[Hearing]) -> Vec<String> {
    distinct_values(hearings.iter().map(|h| h.petitioner_advocate.as_deref()))
}
