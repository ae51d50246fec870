//! Document upload, listing, and download handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use bizdocs_core::error::AppError;
use bizdocs_service::document::UploadParams;

use crate::dto::response::{FileListResponse, MessageResponse};
use crate::state::AppState;

/// Multipart part that carries the document.
const DOCUMENT_FIELD: &str = "document";

/// POST /upload
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut multipart = multipart.map_err(|_| AppError::bad_request("No file part"))?;

    let mut document = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(DOCUMENT_FIELD) {
            continue;
        }
        // A part without a filename is a plain form value, not a file.
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await.map_err(multipart_error)?;
        document = Some(UploadParams { file_name, data });
        break;
    }

    let params = document.ok_or_else(|| AppError::bad_request("No file part"))?;
    let name = state.document_service.upload(params).await?;

    Ok(Json(MessageResponse::new(format!(
        "File uploaded successfully: {name}"
    ))))
}

/// GET /files
pub async fn list_files(
    State(state): State<AppState>,
) -> Result<Json<FileListResponse>, AppError> {
    let uploaded_files = state.document_service.list_names().await?;
    Ok(Json(FileListResponse { uploaded_files }))
}

/// GET /download/{filename}
pub async fn download_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    let result = state.document_service.download(&filename).await?;

    let headers = [
        (header::CONTENT_TYPE, result.content_type),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", result.filename),
        ),
    ];

    Ok((StatusCode::OK, headers, Body::from_stream(result.stream)).into_response())
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large("File exceeds maximum upload size")
    } else {
        AppError::bad_request(format!("Invalid multipart body: {}", err.body_text()))
    }
}
