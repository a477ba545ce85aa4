use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn lawyer_dashboard_counts_cases_and_hearings() {
    let app = test_app();
    let (status, resp) = get(&app, &format!("/api/dashboard/lawyer?name={LAWYER_L}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["lawyer_name"], "L. Menon");
    assert_eq!(resp["active_cases"], 2);
    assert_eq!(resp["total_hearings"], 3);
    assert_eq!(resp["case_ids"], json!(["KAHC010001", "KAHC010002"]));
    assert_eq!(resp["metrics"][0]["label"], "Active Cases");
    assert_eq!(resp["metrics"][1]["value"], "3");
}

#[tokio::test]
async fn lawyer_hearing_table_lists_stages() {
    let app = test_app();
    let (_, resp) = get(&app, "/api/dashboard/lawyer?name=P.%20Iyer").await;
    let rows = resp["hearings"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["case_id"], "KAHC010003");
    assert_eq!(rows[0]["hearing_date"], "2019-03-01");
    assert_eq!(rows[0]["current_stage"], "EVIDENCE");
    assert_eq!(rows[1]["remapped_stage"], "Admission");
}

#[tokio::test]
async fn lawyer_defaults_to_first_picker_entry() {
    let app = test_app();
    let (status, resp) = get(&app, "/api/dashboard/lawyer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["lawyer_name"], "L. Menon");
}

#[tokio::test]
async fn unknown_lawyer_gets_empty_dashboard() {
    let app = test_app();
    let (status, resp) = get(&app, "/api/dashboard/lawyer?name=Nobody").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["active_cases"], 0);
    assert_eq!(resp["total_hearings"], 0);
    assert_eq!(resp["case_ids"], json!([]));
}
