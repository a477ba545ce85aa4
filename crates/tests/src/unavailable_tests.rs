use axum::http::StatusCode;

use crate::common::*;

#[tokio::test]
async fn dashboards_fail_with_data_unavailable() {
    let app = unavailable_app();
    for uri in [
        "/api/dashboard/admin",
        "/api/dashboard/judge",
        "/api/dashboard?role=lawyer",
        "/api/judges",
        "/api/stats/cases/monthly",
    ] {
        let (status, resp) = get(&app, uri).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{uri}");
        assert_eq!(resp["kind"], "DataUnavailable", "{uri}");
    }
}

#[tokio::test]
async fn failed_load_is_retried_on_next_request() {
    let app = unavailable_app();
    let (first, _) = get(&app, "/api/dashboard/admin").await;
    let (second, resp) = get(&app, "/api/dashboard/admin").await;
    assert_eq!(first, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(second, StatusCode::SERVICE_UNAVAILABLE);
    assert!(resp["message"]
        .as_str()
        .unwrap()
        .starts_with("Dataset unavailable"));
}

#[tokio::test]
async fn saving_a_note_needs_the_hearing_table() {
    let app = unavailable_app();
    let (status, _) = post_json(
        &app,
        "/api/notes",
        r#"{"lawyer":"L. Menon","case_id":"KAHC010001","content":"hello"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}
