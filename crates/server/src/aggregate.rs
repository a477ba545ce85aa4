//! Aggregates over a (possibly filtered) table.
//!
//! A "column" is passed as an iterator of per-row values, so the same
//! functions serve both tables and any projection of them. Missing values
//! (`None`) are skipped everywhere.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use shared_types::{MonthCount, ValueCount};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    #[error("no values to aggregate")]
    EmptyAggregation,
}

/// Number of rows satisfying `predicate`.
pub fn count_where<T>(rows: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    rows.iter().filter(|row| predicate(row)).count()
}

/// Arithmetic mean of the non-missing values.
pub fn mean<I>(values: I) -> Result<f64, AggregateError>
where
    I: IntoIterator<Item = Option<f64>>,
{
    mean_with_count(values).map(|(mean, _)| mean)
}

/// Mean together with the number of values it was computed from.
pub fn mean_with_count<I>(values: I) -> Result<(f64, usize), AggregateError>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return Err(AggregateError::EmptyAggregation);
    }
    Ok((sum / count as f64, count))
}

/// The `n` most frequent values, highest count first. Equal counts keep
/// the order in which the values first appeared.
pub fn top_n_frequency<'a, I>(values: I, n: usize) -> Vec<ValueCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    // value -> (count, position of first occurrence)
    let mut counts: HashMap<&'a str, (usize, usize)> = HashMap::new();
    for (position, value) in values.into_iter().flatten().enumerate() {
        counts.entry(value).or_insert((0, position)).0 += 1;
    }

    let mut entries: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first))| (value, count, first))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    entries
        .into_iter()
        .take(n)
        .map(|(value, count, _)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

/// Rows per calendar month, ascending. Missing dates are dropped.
pub fn monthly_bucket_count<I>(dates: I) -> Vec<MonthCount>
where
    I: IntoIterator<Item = Option<NaiveDate>>,
{
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in dates.into_iter().flatten() {
        *buckets.entry(month_start(date)).or_insert(0) += 1;
    }
    buckets
        .into_iter()
        .map(|(month, count)| MonthCount { month, count })
        .collect()
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of unique non-missing values.
pub fn distinct_count<'a, I>(values: I) -> usize
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values.into_iter().flatten().collect::<HashSet<_>>().len()
}

/// Unique non-missing values in first-seen order.
pub fn distinct_values<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .flatten()
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
