use axum::http::StatusCode;
use serde_json::json;

use crate::common::*;

fn note(lawyer: &str, case_id: &str, content: &str) -> String {
    json!({ "lawyer": lawyer, "case_id": case_id, "content": content }).to_string()
}

// ── Save ────────────────────────────────────────────────────────────

#[tokio::test]
async fn first_save_creates_a_session_note() {
    let app = test_app();
    let (status, resp) = post_json(
        &app,
        "/api/notes",
        &note("L. Menon", "KAHC010001", "Seek adjournment"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp["created"], true);
    assert_eq!(resp["durable"], false);
    assert!(resp["message"].as_str().unwrap().contains("session"));
    assert_eq!(resp["note"]["lawyer"], "L. Menon");
    assert_eq!(resp["note"]["case_id"], "KAHC010001");
    assert_eq!(resp["note"]["content"], "Seek adjournment");
}

#[tokio::test]
async fn second_save_replaces_the_note() {
    let app = test_app();
    let (_, first) = post_json(&app, "/api/notes", &note("L. Menon", "KAHC010001", "v1")).await;
    let (status, second) =
        post_json(&app, "/api/notes", &note("L. Menon", "KAHC010001", "v2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["created"], false);
    assert_eq!(second["note"]["id"], first["note"]["id"]);
    assert_eq!(second["note"]["content"], "v2");

    let (_, list) = get(&app, &format!("/api/notes?lawyer={LAWYER_L}")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["content"], "v2");
}

#[tokio::test]
async fn note_on_another_lawyers_case_is_rejected() {
    let app = test_app();
    let (status, resp) =
        post_json(&app, "/api/notes", &note("L. Menon", "KAHC010003", "Not mine")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(resp["kind"], "ValidationError");
    assert!(resp["field_errors"]["case_id"].is_string());
}

#[tokio::test]
async fn empty_note_is_rejected() {
    let app = test_app();
    let (status, resp) = post_json(&app, "/api/notes", &note("L. Menon", "KAHC010001", "")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        resp["field_errors"]["content"],
        "Note must be between 1 and 10000 characters"
    );
}

#[tokio::test]
async fn blank_note_is_rejected() {
    let app = test_app();
    let (status, resp) =
        post_json(&app, "/api/notes", &note("L. Menon", "KAHC010001", "   ")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp["field_errors"]["content"].is_string());
}

#[tokio::test]
async fn oversized_note_is_rejected() {
    let app = test_app();
    let content = "x".repeat(10_001);
    let (status, _) =
        post_json(&app, "/api/notes", &note("L. Menon", "KAHC010001", &content)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ── List ────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_filters_by_case() {
    let app = test_app();
    post_json(&app, "/api/notes", &note("L. Menon", "KAHC010001", "one")).await;
    post_json(&app, "/api/notes", &note("L. Menon", "KAHC010002", "two")).await;
    post_json(&app, "/api/notes", &note("P. Iyer", "KAHC010003", "three")).await;

    let (status, all) = get(&app, &format!("/api/notes?lawyer={LAWYER_L}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, one) = get(&app, &format!("/api/notes?lawyer={LAWYER_L}&case_id=KAHC010002")).await;
    let one = one.as_array().unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0]["content"], "two");
}

#[tokio::test]
async fn list_requires_a_lawyer() {
    let app = test_app();
    let (status, _) = get(&app, "/api/notes").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, resp) = get(&app, "/api/notes?lawyer=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["kind"], "BadRequest");
}
