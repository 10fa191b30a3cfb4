// src/api/http/handlers.rs

use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::warn;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::HealthResponse;
use crate::state::AppState;

/// Liveness plus a record count, so an empty table is visible before anyone ranks it
pub async fn health_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<HealthResponse>> {
    let records = state.ctx.records.count().await.map_err(|e| {
        warn!("Health check failed: {}", e);
        ApiError::service_unavailable("record store unavailable")
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        records,
        timestamp: chrono::Utc::now().timestamp(),
    }))
}
