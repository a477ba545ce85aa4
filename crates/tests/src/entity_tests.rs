use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

// ── Judge picker ────────────────────────────────────────────────────

#[tokio::test]
async fn judges_are_listed_in_first_seen_order() {
    let app = test_app();
    let (status, resp) = get(&app, "/api/judges").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["role"], "judge");
    assert_eq!(resp["names"], json!(["Hon. A. Rao", "Hon. B. Shetty"]));
    assert_eq!(resp["total"], 2);
}

// ── Lawyer picker ───────────────────────────────────────────────────

#[tokio::test]
async fn lawyers_skip_missing_advocates() {
    let app = test_app();
    let (status, resp) = get(&app, "/api/lawyers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["role"], "lawyer");
    assert_eq!(resp["names"], json!(["L. Menon", "P. Iyer"]));
    assert_eq!(resp["total"], 2);
}

#[tokio::test]
async fn lawyer_limit_caps_names_but_not_total() {
    let app = test_app();
    let (status, resp) = get(&app, "/api/lawyers?limit=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["names"], json!(["L. Menon"]));
    assert_eq!(resp["total"], 2);
}

#[tokio::test]
async fn pickers_are_empty_without_data() {
    let app = empty_app();
    let (status, resp) = get(&app, "/api/judges").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["names"], json!([]));
    assert_eq!(resp["total"], 0);
}
