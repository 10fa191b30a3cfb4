// src/api/http/motors.rs

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::core::ops::listing::{ListParams, Page, list_motors};
use crate::motor::MotorRecord;
use crate::state::AppState;

/// GET /motorsport?page=P&page_size=S
pub async fn list_motors_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> ApiResult<Json<Page<MotorRecord>>> {
    let Query(params) = params?;
    let page = list_motors(&state.ctx, params).await?;
    Ok(Json(page))
}
