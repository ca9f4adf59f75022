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
async fn test_blank_string_field_is_rejected() {
    let app = TestApp::new().await;

    let mut payload = event_payload("DevConf 2026");
    payload["venue"] = json!("   ");

    let res = post_event(&app, payload).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    assert!(body["error"].as_str().unwrap().contains("venue"));
}

#[tokio::test]
async fn test_tags_must_be_non_empty_without_blanks() {
    let app = TestApp::new().await;

    let mut payload = event_payload("Empty Tags");
    payload["tags"] = json!([]);
    assert_eq!(post_event(&app, payload).await.status(), StatusCode::BAD_REQUEST);

    let mut payload = event_payload("Blank Tag");
    payload["tags"] = json!(["", "go"]);
    assert_eq!(post_event(&app, payload).await.status(), StatusCode::BAD_REQUEST);

    let mut payload = event_payload("Good Tags");
    payload["tags"] = json!(["go", "rust"]);
    let res = post_event(&app, payload).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["tags"], json!(["go", "rust"]));
}

#[tokio::test]
async fn test_agenda_blank_entry_is_rejected() {
    let app = TestApp::new().await;

    let mut payload = event_payload("Agenda Check");
    payload["agenda"] = json!(["Keynote", "   "]);
    assert_eq!(post_event(&app, payload).await.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_date_is_validated_and_normalized() {
    let app = TestApp::new().await;

    let mut payload = event_payload("Bad Date");
    payload["date"] = json!("2026-13-40");
    assert_eq!(post_event(&app, payload).await.status(), StatusCode::BAD_REQUEST);

    let mut payload = event_payload("Spelled Date");
    payload["date"] = json!("May 13, 2026");
    let res = post_event(&app, payload).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["date"], "2026-05-13");
}

#[tokio::test]
async fn test_time_is_validated_and_normalized() {
    let app = TestApp::new().await;

    let mut payload = event_payload("Short Minutes");
    payload["time"] = json!("9:5");
    assert_eq!(post_event(&app, payload).await.status(), StatusCode::BAD_REQUEST);

    let mut payload = event_payload("Hour Out Of Range");
    payload["time"] = json!("24:00");
    assert_eq!(post_event(&app, payload).await.status(), StatusCode::BAD_REQUEST);

    let mut payload = event_payload("Last Minute");
    payload["time"] = json!("23:59");
    let res = post_event(&app, payload).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["time"], "23:59");

    let mut payload = event_payload("Padded Hour");
    payload["time"] = json!("9:30");
    let res = post_event(&app, payload).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["time"], "09:30");
}

#[tokio::test]
async fn test_fields_are_stored_trimmed() {
    let app = TestApp::new().await;

    let mut payload = event_payload("Trim Check");
    payload["organizer"] = json!("  Google  ");

    let res = post_event(&app, payload).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["organizer"], "Google");
}

#[tokio::test]
async fn test_duplicate_slug_is_a_conflict() {
    let app = TestApp::new().await;

    assert_eq!(post_event(&app, event_payload("Same Title")).await.status(), StatusCode::OK);

    let res = post_event(&app, event_payload("Same Title")).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}
