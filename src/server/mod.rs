//! HTTP server bootstrap - pool, state, listener

mod db;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::api::http::http_router;
use crate::config::MotorConfig;
use crate::core::primitives::SawWeighting;
use crate::motor::SqliteMotorStore;
use crate::state::AppState;

pub use db::{create_pool, run_migrations};

/// Build application state on top of the configured SQLite database
pub async fn build_state(config: &MotorConfig) -> Result<Arc<AppState>> {
    info!("Connecting to database: {}", config.database_url);
    let pool = create_pool(&config.database_url, config.sqlite_max_connections).await?;
    run_migrations(&pool, Path::new(&config.migrations_dir)).await?;

    let state = AppState::new(Arc::new(SqliteMotorStore::new(pool)))
        .with_saw_weighting(SawWeighting::from_legacy_flag(config.saw_legacy_cc_weight))
        .with_default_page_size(config.default_page_size);

    if config.saw_legacy_cc_weight {
        info!("SAW scoring uses legacy cc weighting (cc weighted by harga)");
    }

    Ok(Arc::new(state))
}

/// Serve the HTTP API until Ctrl+C
pub async fn serve(config: &MotorConfig, state: Arc<AppState>) -> Result<()> {
    let app = http_router(state, config)?;

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    info!("HTTP server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
