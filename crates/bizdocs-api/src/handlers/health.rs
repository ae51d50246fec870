//! Health check handler.

use axum::Json;
use axum::extract::State;

use bizdocs_database::connection::health_check;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = health_check(&state.db_pool).await.unwrap_or(false);
    let storage = state.document_service.storage_healthy().await;

    Json(HealthResponse {
        status: if database && storage { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        storage,
    })
}
