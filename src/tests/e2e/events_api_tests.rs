// End to end tests through the full router: list and create against one
// shared in memory repository.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use tower::ServiceExt;

use crate::modules::events::core::seed::{SeedMode, sample_events};
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::payloads::{EVENT_BAD_NAME_LENGTH, EVENT_OK};

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn list_request() -> Request<Body> {
    Request::get("/api/events").body(Body::empty()).unwrap()
}

fn create_request(body: &'static str) -> Request<Body> {
    Request::put("/api/events")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn list_len(app: &Router) -> usize {
    let (status, json) = send(app, list_request()).await;
    assert_eq!(status, StatusCode::OK);
    json.as_array().unwrap().len()
}

#[tokio::test]
async fn listing_twice_appends_four_records_when_seeding_every_list() {
    let app = router(AppState::build(SeedMode::EveryList).await.unwrap());

    assert_eq!(list_len(&app).await, 2);
    assert_eq!(list_len(&app).await, 4);
}

#[tokio::test]
async fn listing_is_idempotent_when_seeded_at_startup() {
    let app = router(AppState::build(SeedMode::Startup).await.unwrap());

    let (_, first) = send(&app, list_request()).await;
    let (_, second) = send(&app, list_request()).await;

    assert_eq!(first, second);
    assert_eq!(first, serde_json::to_value(sample_events()).unwrap());
}

#[tokio::test]
async fn a_created_event_shows_up_in_the_list() {
    let app = router(AppState::build(SeedMode::Startup).await.unwrap());

    let (status, created) = send(&app, create_request(EVENT_OK)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, listed) = send(&app, list_request()).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[2], created);
}

#[tokio::test]
async fn a_rejected_event_is_not_appended() {
    let app = router(AppState::build(SeedMode::Off).await.unwrap());

    let (status, json) = send(&app, create_request(EVENT_BAD_NAME_LENGTH)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        serde_json::json!({ "message": ["Name is too short, min. 10 characters!"] })
    );
    assert_eq!(list_len(&app).await, 0);
}

#[tokio::test]
async fn each_created_event_gets_a_distinct_id() {
    let app = router(AppState::build(SeedMode::Off).await.unwrap());

    let (_, first) = send(&app, create_request(EVENT_OK)).await;
    let (_, second) = send(&app, create_request(EVENT_OK)).await;

    assert_ne!(first["id"], second["id"]);
}

#[rstest]
#[case::post("POST")]
#[case::delete("DELETE")]
#[tokio::test]
async fn other_methods_are_not_allowed(#[case] method: &str) {
    let app = router(AppState::build(SeedMode::Off).await.unwrap());
    let request = Request::builder()
        .method(method)
        .uri("/api/events")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let app = router(AppState::build(SeedMode::Off).await.unwrap());
    let request = Request::get("/events").body(Body::empty()).unwrap();

    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
