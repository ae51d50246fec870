//! Company registration and login handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use bizdocs_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::MessageResponse;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    state.company_service.register(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Company registered successfully!")),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let company = state.company_service.login(req.into()).await?;

    Ok(Json(MessageResponse::new(format!(
        "Welcome, {}!",
        company.company_name
    ))))
}
