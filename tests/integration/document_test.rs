//! Integration tests for document upload, listing, and download.

mod helpers;

use http::StatusCode;
use http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};

#[tokio::test]
async fn test_upload_list_download() {
    let app = helpers::TestApp::new().await;
    let content = b"%PDF-1.7\n\x00\x01binary body\xff".to_vec();

    let response = app
        .upload("document", Some("report.pdf"), &content)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        "File uploaded successfully: report.pdf"
    );

    let listing = app.request("GET", "/files", None).await;
    assert_eq!(listing.status, StatusCode::OK);
    assert_eq!(
        listing.body["uploaded_files"],
        serde_json::json!(["report.pdf"])
    );

    let download = app.get_raw("/download/report.pdf").await;
    assert_eq!(download.status, StatusCode::OK);
    assert_eq!(download.body, content);
    assert_eq!(download.headers[CONTENT_TYPE], "application/pdf");
    assert_eq!(
        download.headers[CONTENT_DISPOSITION],
        "attachment; filename=\"report.pdf\""
    );
}

#[tokio::test]
async fn test_empty_listing() {
    let app = helpers::TestApp::new().await;

    let listing = app.request("GET", "/files", None).await;
    assert_eq!(listing.status, StatusCode::OK);
    assert_eq!(listing.body["uploaded_files"], serde_json::json!([]));
}

#[tokio::test]
async fn test_disallowed_extension_not_stored() {
    let app = helpers::TestApp::new().await;

    let response = app.upload("document", Some("tool.exe"), b"MZ").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid file type");
    assert_eq!(response.body["code"], "INVALID_FILE_TYPE");

    let listing = app.request("GET", "/files", None).await;
    assert_eq!(listing.body["uploaded_files"], serde_json::json!([]));
}

#[tokio::test]
async fn test_uppercase_extension_allowed() {
    let app = helpers::TestApp::new().await;

    let response = app.upload("document", Some("Scan.JPG"), b"jpeg").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(app.upload_dir.join("Scan.JPG").exists());
}

#[tokio::test]
async fn test_missing_file_part() {
    let app = helpers::TestApp::new().await;

    let wrong_field = app.upload("attachment", Some("report.pdf"), b"x").await;
    assert_eq!(wrong_field.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_field.body["error"], "No file part");

    let not_a_file = app.upload("document", None, b"x").await;
    assert_eq!(not_a_file.status, StatusCode::BAD_REQUEST);
    assert_eq!(not_a_file.body["error"], "No file part");

    let json_body = app
        .request("POST", "/upload", Some(serde_json::json!({})))
        .await;
    assert_eq!(json_body.status, StatusCode::BAD_REQUEST);
    assert_eq!(json_body.body["error"], "No file part");
}

#[tokio::test]
async fn test_empty_filename() {
    let app = helpers::TestApp::new().await;

    let response = app.upload("document", Some(""), b"x").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "No selected file");
}

#[tokio::test]
async fn test_upload_name_is_sanitized() {
    let app = helpers::TestApp::new().await;

    let response = app
        .upload("document", Some("../../etc/my report.pdf"), b"x")
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["message"],
        "File uploaded successfully: etc_my_report.pdf"
    );
    assert!(app.upload_dir.join("etc_my_report.pdf").exists());
    assert!(!app.dir.path().join("etc").exists());
}

#[tokio::test]
async fn test_download_missing() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/download/nothing.pdf", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "File not found");
}

#[tokio::test]
async fn test_download_cannot_escape_upload_dir() {
    let app = helpers::TestApp::new().await;
    std::fs::write(app.dir.path().join("companies.pdf"), b"outside").unwrap();

    for path in [
        "/download/..%2Fcompanies.pdf",
        "/download/%2E%2E%2Fcompanies.pdf",
        "/download/..%5Ccompanies.pdf",
    ] {
        let response = app.get_raw(path).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
        assert_ne!(response.body, b"outside");
    }
}

#[tokio::test]
async fn test_oversized_upload_rejected() {
    let app = helpers::TestApp::with_config(|config| {
        config.storage.max_upload_size_bytes = 1024;
    })
    .await;

    let response = app
        .upload("document", Some("big.pdf"), &vec![b'a'; 4096])
        .await;
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["code"], "PAYLOAD_TOO_LARGE");

    let listing = app.request("GET", "/files", None).await;
    assert_eq!(listing.body["uploaded_files"], serde_json::json!([]));
}

#[tokio::test]
async fn test_reupload_overwrites() {
    let app = helpers::TestApp::new().await;

    app.upload("document", Some("logo.png"), b"first").await;
    app.upload("document", Some("logo.png"), b"second").await;

    let listing = app.request("GET", "/files", None).await;
    assert_eq!(listing.body["uploaded_files"], serde_json::json!(["logo.png"]));

    let download = app.get_raw("/download/logo.png").await;
    assert_eq!(download.body, b"second");
    assert_eq!(download.headers[CONTENT_TYPE], "image/png");
}
