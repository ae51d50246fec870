//! Integration tests for health, CORS, and unknown routes.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode};

#[tokio::test]
async fn test_health_ok() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], true);
    assert_eq!(response.body["storage"], true);
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_degraded_when_database_closed() {
    let app = helpers::TestApp::new().await;
    app.db_pool.close().await;

    let response = app.request("GET", "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["database"], false);
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = helpers::TestApp::new().await;

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/register")
        .header("Origin", "http://frontend.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert!(response.status.is_success());
    assert_eq!(response.headers["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/nope", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["code"], "NOT_FOUND");
}
