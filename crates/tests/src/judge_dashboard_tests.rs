use axum::http::StatusCode;

use crate::common::*;

#[tokio::test]
async fn judge_dashboard_counts_their_cases() {
    let app = test_app();
    let (status, resp) = get(&app, &format!("/api/dashboard/judge?name={JUDGE_A}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["judge_name"], "Hon. A. Rao");
    assert_eq!(resp["total_cases"], 3);
    assert_eq!(resp["pending_cases"], 2);
    assert_eq!(resp["disposed_cases"], 1);

    let metrics = resp["metrics"].as_array().unwrap();
    assert_eq!(metrics[0]["label"], "Total Cases");
    assert_eq!(metrics[0]["value"], "3");
    assert_eq!(metrics[1]["label"], "Pending Cases");
    assert_eq!(metrics[2]["label"], "Disposed Cases");
}

#[tokio::test]
async fn judge_dashboard_charts_case_types() {
    let app = test_app();
    let (_, resp) = get(&app, "/api/dashboard/judge?name=Hon.%20B.%20Shetty").await;
    let chart = &resp["case_type_distribution"];
    assert_eq!(chart["orientation"], "vertical");
    assert_eq!(chart["category_label"], "Case Type");

    let bars = chart["bars"].as_array().unwrap();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0]["label"], "CRP");
    assert_eq!(bars[0]["value"], 1);
    assert_eq!(bars[1]["label"], "MFA");
}

#[tokio::test]
async fn judge_case_table_keeps_source_order() {
    let app = test_app();
    let (_, resp) = get(&app, &format!("/api/dashboard/judge?name={JUDGE_A}")).await;
    let rows = resp["recent_cases"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["case_number"], "WP 101/2019");
    assert_eq!(rows[1]["status"], "Disposed");
    assert_eq!(rows[1]["decision_date"], "2019-03-11");
    assert!(rows[2]["date_filed"].is_null());
}

#[tokio::test]
async fn judge_defaults_to_first_picker_entry() {
    let app = test_app();
    let (status, resp) = get(&app, "/api/dashboard/judge").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["judge_name"], "Hon. A. Rao");
}

#[tokio::test]
async fn unknown_judge_gets_empty_dashboard() {
    let app = test_app();
    let (status, resp) = get(&app, "/api/dashboard/judge?name=Nobody").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["total_cases"], 0);
    assert_eq!(resp["pending_cases"], 0);
    assert_eq!(resp["recent_cases"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn judge_dashboard_without_judges_is_not_found() {
    let app = empty_app();
    let (status, resp) = get(&app, "/api/dashboard/judge").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(resp["kind"], "NotFound");
}
