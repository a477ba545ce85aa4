use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use shared_types::DashboardSettings;
use tower::ServiceExt;

use server::dataset::{parse_cases, parse_hearings, DataContext, DatasetCache};
use server::notes::InMemoryNoteStore;
use server::state::AppState;

/// Six cases across two judges. One has an unparseable filing date, one has
/// no judge and a status that is neither Pending nor Disposed.
pub const CASES_CSV: &str = "\
COMBINED_CASE_NUMBER,CNR_NUMBER,CASE_TYPE,CURRENT_STATUS,DATE_FILED,DECISION_DATE,DISPOSALTIME_ADJ,NJDG_JUDGE_NAME
WP 101/2019,KAHC010001,WP,Pending,2019-01-15,,1450,Hon. A. Rao
WP 102/2019,KAHC010002,WP,Disposed,2019-01-20,2019-03-11,50,Hon. A. Rao
CRP 7/2019,KAHC010003,CRP,Disposed,2019-02-03,2019-08-02,180,Hon. B. Shetty
MFA 12/2020,KAHC010004,MFA,Pending,2020-03-10,,1100,Hon. B. Shetty
WP 55/2020,KAHC010005,WP,Pending,not a date,,,Hon. A. Rao
RFA 3/2021,KAHC010006,RFA,Transferred,2021-07-01,,200,
";

/// Six hearings across two lawyers; the last has no advocate.
pub const HEARINGS_CSV: &str = "\
CNR_NUMBER,HearingDate,CurrentStage,Remappedstages,PetitionerAdvocate
KAHC010001,2019-02-01,ADMISSION,Admission,L. Menon
KAHC010001,2019-05-01,HEARING,Hearing,L. Menon
KAHC010002,2019-02-10,ADMISSION,Admission,L. Menon
KAHC010003,2019-03-01,EVIDENCE,Evidence,P. Iyer
KAHC010004,2020-04-01,ADMISSION,Admission,P. Iyer
KAHC010004,2020-06-01,ARGUMENTS,Arguments,
";

pub const JUDGE_A: &str = "Hon.%20A.%20Rao";
pub const LAWYER_L: &str = "L.%20Menon";

fn router_with(datasets: DatasetCache) -> Router {
    let state = AppState::new(datasets, InMemoryNoteStore::new(), DashboardSettings::default());
    server::openapi::app_router(state)
}

/// Router over the fixture tables.
pub fn test_app() -> Router {
    let cases = parse_cases(CASES_CSV.as_bytes()).expect("fixture cases parse");
    let hearings = parse_hearings(HEARINGS_CSV.as_bytes()).expect("fixture hearings parse");
    router_with(DatasetCache::preloaded(DataContext::new(cases, hearings)))
}

/// Router over tables with no rows at all.
pub fn empty_app() -> Router {
    router_with(DatasetCache::preloaded(DataContext::new(vec![], vec![])))
}

/// Router whose sources cannot be read, so every load fails.
pub fn unavailable_app() -> Router {
    let sources = server::dataset::DatasetSources {
        cases: server::dataset::DataSource::File("/nonexistent/caseboard/cases.csv".into()),
        hearings: server::dataset::DataSource::File("/nonexistent/caseboard/hearings.csv".into()),
    };
    router_with(DatasetCache::new(reqwest::Client::new(), sources))
}

/// GET a route.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}

/// POST JSON to a route.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, req).await
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}
