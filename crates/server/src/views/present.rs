//! Shapes aggregate results into display-ready structures.

use shared_types::{
    Bar, BarChart, BarOrientation, LineChart, LinePoint, MetricCard, MonthCount, ValueCount,
};

/// Shown in place of a metric that has no underlying data.
pub const NO_DATA: &str = "no data";

pub fn metric(label: &str, value: impl ToString) -> MetricCard {
    MetricCard {
        label: label.to_string(),
        value: value.to_string(),
    }
}

/// "N days" for a computed mean, the placeholder otherwise.
pub fn days_label(days: Option<f64>) -> String {
    match days {
        Some(days) => format!("{days:.0} days"),
        None => NO_DATA.to_string(),
    }
}

pub fn bar_chart(
    title: &str,
    category_label: &str,
    value_label: &str,
    orientation: BarOrientation,
    entries: Vec<ValueCount>,
) -> BarChart {
    BarChart {
        title: title.to_string(),
        category_label: category_label.to_string(),
        value_label: value_label.to_string(),
        orientation,
        bars: entries
            .into_iter()
            .map(|entry| Bar {
                label: entry.value,
                value: entry.count,
            })
            .collect(),
    }
}

pub fn line_chart(
    title: &str,
    x_label: &str,
    y_label: &str,
    buckets: Vec<MonthCount>,
    excluded_rows: usize,
) -> LineChart {
    LineChart {
        title: title.to_string(),
        x_label: x_label.to_string(),
        y_label: y_label.to_string(),
        points: buckets
            .into_iter()
            .map(|bucket| LinePoint {
                x: bucket.month,
                y: bucket.count,
            })
            .collect(),
        excluded_rows,
    }
}

/// The first `limit` rows, converted for display.
pub fn table<'a, S, R>(rows: impl IntoIterator<Item = &'a S>, limit: usize) -> Vec<R>
where
    S: 'a,
    R: From<&'a S>,
{
    rows.into_iter().take(limit).map(R::from).collect()
}
