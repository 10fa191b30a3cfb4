// src/api/http/router.rs
// HTTP router composition for REST API endpoints

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::get,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use super::{
    handlers::health_handler,
    motors::list_motors_handler,
    scoring::{saw_custom_handler, saw_default_handler, wp_custom_handler, wp_default_handler},
};
use crate::config::MotorConfig;
use crate::state::AppState;

/// Routes without middleware; state is supplied by the caller
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/motorsport", get(list_motors_handler))
        .route("/wp", get(wp_default_handler).post(wp_custom_handler))
        .route("/saw", get(saw_default_handler).post(saw_custom_handler))
}

/// Full application router with tracing, timeout and CORS layers
pub fn http_router(app_state: Arc<AppState>, config: &MotorConfig) -> Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Ok(api_routes()
        .with_state(app_state)
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
