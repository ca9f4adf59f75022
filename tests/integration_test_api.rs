mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn event_payload(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Flagship developer conference",
        "overview": "Keynotes, sessions and codelabs",
        "image": "/images/io.png",
        "venue": "Shoreline Amphitheatre",
        "location": "Mountain View, CA",
        "date": "2026-05-13",
        "time": "09:00",
        "mode": "Hybrid",
        "audience": "Developers",
        "organizer": "Google",
        "agenda": ["Keynote", "Sessions"],
        "tags": ["android", "web"]
    })
}

async fn post_event(app: &TestApp, payload: Value) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/events")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/health")
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_events_starts_empty() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/events")
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_create_then_fetch_by_slug() {
    let app = TestApp::new().await;

    let res = post_event(&app, event_payload("DevConf 2026")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let created = parse_body(res).await;
    assert_eq!(created["slug"], "devconf-2026");
    assert_eq!(created["title"], "DevConf 2026");

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/events/devconf-2026")
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let fetched = parse_body(res).await;
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["tags"], json!(["android", "web"]));
}

#[tokio::test]
async fn test_get_unknown_slug_is_404() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/events/nope")
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_unknown_slug_is_404() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/api/v1/events/nope")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"description": "x"}).to_string())).unwrap()
    ).await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_listing_is_ordered_and_complete() {
    let app = TestApp::new().await;

    let mut first = event_payload("Later Event");
    first["date"] = json!("2026-09-01");
    assert_eq!(post_event(&app, first).await.status(), StatusCode::OK);

    let mut second = event_payload("Earlier Event");
    second["date"] = json!("2026-03-01");
    assert_eq!(post_event(&app, second).await.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/events")
            .body(Body::empty()).unwrap()
    ).await.unwrap();

    let body = parse_body(res).await;
    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["slug"], "earlier-event");
    assert_eq!(events[1]["slug"], "later-event");
}
