// src/api/http/scoring.rs
// Weighted Product and SAW ranking endpoints

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::types::{RankingResponse, SawEntry, WpEntry};
use crate::core::ops::ranking::{rank_simple_additive, rank_weighted_product};
use crate::core::primitives::WeightTable;
use crate::state::AppState;

/// Validate a raw weight payload before it reaches a scorer
fn weights_from_payload(payload: Result<Json<BTreeMap<String, f64>>, JsonRejection>) -> ApiResult<WeightTable> {
    let Json(raw) = payload?;
    Ok(WeightTable::from_raw(&raw)?)
}

/// GET /wp - rank with default weights
pub async fn wp_default_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<WpEntry>>> {
    let results = rank_weighted_product(&state.ctx, &WeightTable::default()).await?;
    Ok(Json(results.into_iter().map(WpEntry::from).collect()))
}

/// POST /wp - rank with caller-supplied raw weights
pub async fn wp_custom_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BTreeMap<String, f64>>, JsonRejection>,
) -> ApiResult<Json<RankingResponse<WpEntry>>> {
    let weights = weights_from_payload(payload)?;
    info!("Weighted Product with custom weights: {:?}", weights);

    let results = rank_weighted_product(&state.ctx, &weights).await?;
    Ok(Json(RankingResponse {
        motor_sport: results.into_iter().map(WpEntry::from).collect(),
    }))
}

/// GET /saw - rank with default weights
pub async fn saw_default_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<SawEntry>>> {
    let results = rank_simple_additive(&state.ctx, &WeightTable::default()).await?;
    Ok(Json(results.into_iter().map(SawEntry::from).collect()))
}

/// POST /saw - rank with caller-supplied raw weights
pub async fn saw_custom_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BTreeMap<String, f64>>, JsonRejection>,
) -> ApiResult<Json<RankingResponse<SawEntry>>> {
    let weights = weights_from_payload(payload)?;
    info!("SAW with custom weights: {:?}", weights);

    let results = rank_simple_additive(&state.ctx, &weights).await?;
    Ok(Json(RankingResponse {
        motor_sport: results.into_iter().map(SawEntry::from).collect(),
    }))
}
