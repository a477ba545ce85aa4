use axum::http::StatusCode;

use crate::common::*;

#[tokio::test]
async fn dispatch_tags_judge_dashboard() {
    let app = test_app();
    let (status, resp) = get(&app, &format!("/api/dashboard?role=judge&name={JUDGE_A}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["role"], "judge");
    assert_eq!(resp["total_cases"], 3);
}

#[tokio::test]
async fn dispatch_tags_lawyer_dashboard() {
    let app = test_app();
    let (status, resp) = get(&app, &format!("/api/dashboard?role=lawyer&name={LAWYER_L}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["role"], "lawyer");
    assert_eq!(resp["active_cases"], 2);
    assert_eq!(resp["total_hearings"], 3);
}

#[tokio::test]
async fn dispatch_accepts_admin_alias() {
    let app = test_app();
    let (status, resp) = get(&app, "/api/dashboard?role=admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["role"], "administrator");
    assert_eq!(resp["total_cases"], 6);
}

#[tokio::test]
async fn dispatch_defaults_name_for_named_roles() {
    let app = test_app();
    let (status, resp) = get(&app, "/api/dashboard?role=lawyer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["lawyer_name"], "L. Menon");
}

#[tokio::test]
async fn dispatch_rejects_unknown_role() {
    let app = test_app();
    let (status, _) = get(&app, "/api/dashboard?role=clerk").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dispatch_requires_role() {
    let app = test_app();
    let (status, _) = get(&app, "/api/dashboard").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
