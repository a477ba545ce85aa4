use axum::http::StatusCode;

use crate::common::*;

#[tokio::test]
async fn health_reports_loaded_datasets() {
    let app = test_app();
    let (status, resp) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["status"], "ok");
    assert_eq!(resp["datasets"], "loaded");
    assert_eq!(resp["case_rows"], 6);
    assert_eq!(resp["hearing_rows"], 6);
    assert!(resp["version"].is_string());
}

#[tokio::test]
async fn health_does_not_trigger_a_load() {
    let app = unavailable_app();
    let (status, resp) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["datasets"], "not_loaded");
    assert_eq!(resp["case_rows"], 0);
}

#[tokio::test]
async fn docs_are_served() {
    let app = test_app();
    let (status, _) = get(&app, "/docs").await;
    assert_eq!(status, StatusCode::OK);
}
