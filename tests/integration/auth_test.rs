//! Integration tests for company registration and login.

mod helpers;

use futures::future::join_all;
use http::StatusCode;

#[tokio::test]
async fn test_register_then_login() {
    let app = helpers::TestApp::new().await;

    let response = app.register_acme().await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Company registered successfully!");

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "email": "a@x.com", "password": "secret" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Welcome, Acme!");
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.register_acme().await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "email": "a@x.com", "password": "wrong" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid credentials!");
    assert_eq!(response.body["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_unregistered_email() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "email": "nobody@x.com", "password": "secret" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Please register first!");
}

#[tokio::test]
async fn test_register_duplicate_email_or_gst() {
    let app = helpers::TestApp::new().await;
    assert_eq!(app.register_acme().await.status, StatusCode::CREATED);

    let same_email = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "company_name": "Other",
                "email": "a@x.com",
                "gst_number": "GST2",
                "password": "pw",
            })),
        )
        .await;
    assert_eq!(same_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(same_email.body["error"], "Company already registered!");

    let same_gst = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "company_name": "Other",
                "email": "b@x.com",
                "gst_number": "GST1",
                "password": "pw",
            })),
        )
        .await;
    assert_eq!(same_gst.status, StatusCode::BAD_REQUEST);
    assert_eq!(same_gst.body["code"], "CONFLICT");

    assert_eq!(app.company_count().await, 1);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = helpers::TestApp::new().await;

    let absent = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "company_name": "Acme",
                "email": "a@x.com",
                "password": "secret",
            })),
        )
        .await;
    assert_eq!(absent.status, StatusCode::BAD_REQUEST);
    assert!(
        absent.body["error"]
            .as_str()
            .unwrap()
            .starts_with("Missing fields")
    );

    let empty = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "company_name": "",
                "email": "a@x.com",
                "gst_number": "GST1",
                "password": "secret",
            })),
        )
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.body["code"], "VALIDATION_ERROR");

    assert_eq!(app.company_count().await, 0);
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = helpers::TestApp::new().await;

    let req = http::Request::builder()
        .method("POST")
        .uri("/login")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{\"email\": "))
        .unwrap();
    let response: helpers::TestResponse = app.send(req).await.into();

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_concurrent_duplicate_registration() {
    let app = helpers::TestApp::new().await;

    let attempts = (0..4).map(|_| app.register_acme());
    let responses = join_all(attempts).await;

    let created = responses
        .iter()
        .filter(|r| r.status == StatusCode::CREATED)
        .count();
    assert_eq!(created, 1);
    assert!(
        responses
            .iter()
            .filter(|r| r.status != StatusCode::CREATED)
            .all(|r| r.status == StatusCode::BAD_REQUEST)
    );
    assert_eq!(app.company_count().await, 1);
}
