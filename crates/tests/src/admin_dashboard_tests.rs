use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn admin_dashboard_summarises_the_court() {
    let app = test_app();
    let (status, resp) = get(&app, "/api/dashboard/admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["total_cases"], 6);
    assert_eq!(resp["pending_cases"], 3);
    assert_eq!(resp["disposed_cases"], 2);
    assert_eq!(resp["avg_disposal_days"], 115.0);
    assert_eq!(resp["metrics"][3], json!({ "label": "Avg Disposal Time", "value": "115 days" }));
}

#[tokio::test]
async fn admin_bottlenecks_rank_remapped_stages() {
    let app = test_app();
    let (_, resp) = get(&app, "/api/dashboard/admin").await;
    let chart = &resp["bottlenecks"];
    assert_eq!(chart["orientation"], "horizontal");
    assert_eq!(chart["title"], "Cases by Stage (Identify Bottlenecks)");
    assert_eq!(chart["value_label"], "Number of Cases");
    assert_eq!(
        chart["bars"],
        json!([
            { "label": "Admission", "value": 3 },
            { "label": "Hearing", "value": 1 },
            { "label": "Evidence", "value": 1 },
            { "label": "Arguments", "value": 1 },
        ])
    );
}

#[tokio::test]
async fn admin_filing_trend_is_monthly_and_skips_bad_dates() {
    let app = test_app();
    let (_, resp) = get(&app, "/api/dashboard/admin").await;
    let trend = &resp["filing_trend"];
    assert_eq!(
        trend["points"],
        json!([
            { "x": "2019-01-01", "y": 2 },
            { "x": "2019-02-01", "y": 1 },
            { "x": "2020-03-01", "y": 1 },
            { "x": "2021-07-01", "y": 1 },
        ])
    );
    assert_eq!(trend["excluded_rows"], 1);
}

#[tokio::test]
async fn admin_long_pending_lists_oldest_first() {
    let app = test_app();
    let (_, resp) = get(&app, "/api/dashboard/admin").await;
    assert_eq!(resp["long_pending_total"], 2);
    let rows = resp["long_pending"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["case_number"], "WP 101/2019");
    assert_eq!(rows[0]["disposal_time_days"], 1450.0);
    assert_eq!(rows[1]["case_number"], "MFA 12/2020");
    assert_eq!(rows[1]["judge_name"], "Hon. B. Shetty");
}

#[tokio::test]
async fn admin_dashboard_over_empty_tables_uses_placeholder() {
    let app = empty_app();
    let (status, resp) = get(&app, "/api/dashboard/admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["total_cases"], 0);
    assert!(resp["avg_disposal_days"].is_null());
    assert_eq!(resp["metrics"][3]["value"], "no data");
    assert_eq!(resp["long_pending"], json!([]));
}
