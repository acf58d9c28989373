//! Health endpoint — bootstrap connectivity check.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::AppState;
use crate::error::AppResult;

/// Health response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub db_connected: bool,
}

/// `GET /health` — reports process liveness and store connectivity.
pub async fn health_handler(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let db_connected = sqlx::query("SELECT 1")
        .execute(state.store.pool())
        .await
        .is_ok();

    Ok(Json(HealthResponse {
        status: "ok".into(),
        db_connected,
    }))
}
