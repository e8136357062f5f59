//! Tests for the web form router

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use common::{incident, FakeSearch};
use incident_resolver::web::{build_router, AppState};
use std::sync::Arc;
use tower::ServiceExt;

fn app(search: Arc<FakeSearch>) -> Router {
    build_router(AppState::new(search))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_blank_form_does_not_query() {
    let search = Arc::new(FakeSearch::reachable());

    let (status, body) = send(app(search.clone()), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Describe your issue:"));
    assert!(!body.contains("No solution found"));

    let (status, _) = send(app(search.clone()), post_form("q=+++")).await;
    assert_eq!(status, StatusCode::OK);

    assert!(search.calls().is_empty());
}

#[tokio::test]
async fn test_submission_renders_best_match_only() {
    let query = "VPN keeps asking for password and won't connect";
    let search = Arc::new(FakeSearch::reachable().with_records(
        query,
        vec![
            incident("INC1001", "Network", Some("KB-204")),
            incident("INC1002", "Network", Some("KB-205")),
        ],
    ));

    let form = "q=VPN+keeps+asking+for+password+and+won%27t+connect";
    let (status, body) = send(app(search.clone()), post_form(form)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Solution Found"));
    assert!(body.contains("<strong>Category:</strong> Network"));
    assert!(body.contains("<strong>Root Cause:</strong> Root cause of INC1001"));
    assert!(body.contains("Resolution steps for INC1001"));
    assert!(body.contains("<strong>KB:</strong> KB-204"));
    assert!(!body.contains("INC1002"));

    // The form always asks for exactly one result
    assert_eq!(search.calls(), vec![(query.to_string(), 1)]);
}

#[tokio::test]
async fn test_query_string_submission() {
    let search = Arc::new(
        FakeSearch::reachable()
            .with_records("printer jammed", vec![incident("INC3003", "Printing", None)]),
    );

    let (status, body) = send(app(search.clone()), get("/?q=printer%20jammed")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<strong>KB:</strong> N/A"));
    assert_eq!(search.calls(), vec![("printer jammed".to_string(), 1)]);
}

#[tokio::test]
async fn test_no_match_renders_explicit_panel() {
    let search = Arc::new(FakeSearch::reachable());

    let (status, body) = send(app(search), post_form("q=asdkjhaskjdh")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No solution found"));
    assert!(!body.contains("Solution Found"));
}

#[tokio::test]
async fn test_service_failure_renders_error_panel() {
    let search = Arc::new(FakeSearch::failing());

    let (status, body) = send(app(search.clone()), post_form("q=outlook+frozen")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("could not be reached"));
    assert!(!body.contains("index offline"));

    // Still serving afterwards
    let (status, _) = send(app(search), get("/")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint() {
    let search = Arc::new(FakeSearch::unreachable());
    let (status, body) = send(app(search), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_json_lookup() {
    let search = Arc::new(FakeSearch::reachable().with_records(
        "disk space alert",
        vec![
            incident("INC1", "Storage", Some("KB-1")),
            incident("INC2", "Storage", None),
            incident("INC3", "Storage", None),
            incident("INC4", "Storage", None),
        ],
    ));

    let (status, body) = send(
        app(search.clone()),
        get("/v1/incidents/search?q=disk%20space%20alert"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["count"], 3);
    assert_eq!(json["results"][0]["ticket_id"], "INC1");
    assert_eq!(json["results"][2]["ticket_id"], "INC3");

    let (status, body) = send(
        app(search.clone()),
        get("/v1/incidents/search?q=disk%20space%20alert&top=1"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["count"], 1);
}

#[tokio::test]
async fn test_json_lookup_errors() {
    let search = Arc::new(FakeSearch::reachable());

    let (status, body) = send(app(search.clone()), get("/v1/incidents/search?q=vpn&top=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert!(search.calls().is_empty());

    let failing = Arc::new(FakeSearch::failing());
    let (status, body) = send(app(failing), get("/v1/incidents/search?q=vpn")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["code"], "UPSTREAM_ERROR");
}
