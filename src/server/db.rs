//! Database pool configuration and migrations

use anyhow::{Context, Result};
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Create the SQLite connection pool
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        // Don't wait too long for a connection
        .acquire_timeout(Duration::from_secs(10))
        // Recycle connections periodically
        .max_lifetime(Duration::from_secs(1800)) // 30 minutes
        .idle_timeout(Duration::from_secs(600)) // 10 minutes
        .connect(database_url)
        .await
        .with_context(|| format!("Failed to connect to database: {database_url}"))
}

/// Run database migrations from a directory
///
/// Applies any pending migrations from the specified directory.
/// Uses SQLite's `_sqlx_migrations` table to track applied migrations.
pub async fn run_migrations(pool: &SqlitePool, migrations_path: &Path) -> Result<()> {
    if !migrations_path.exists() {
        warn!("Migrations directory not found: {}", migrations_path.display());
        return Ok(());
    }

    let migrator = Migrator::new(migrations_path)
        .await
        .context("Failed to load migrations")?;

    let pending = migrator
        .migrations
        .iter()
        .filter(|m| !m.migration_type.is_down_migration())
        .count();

    if pending > 0 {
        info!("Checking {} migrations...", pending);
    }

    migrator.run(pool).await.context("Migration failed")?;

    info!("Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrations_create_table() {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();
        run_migrations(&pool, &Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations"))
            .await
            .unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pilihanmotor")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_missing_migrations_dir_is_skipped() {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();
        let dir = tempfile::tempdir().unwrap();
        run_migrations(&pool, &dir.path().join("nope")).await.unwrap();
    }
}
