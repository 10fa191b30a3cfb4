// src/motor/store.rs
// Read access to motorcycle records, behind a trait so handlers don't hold a global session

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use super::types::MotorRecord;
use crate::core::CoreResult;

/// Source of motorcycle records for scoring and listing
#[async_trait]
pub trait MotorRepository: Send + Sync {
    /// Fetch every record, in storage order. One call per request.
    async fn fetch_all(&self) -> CoreResult<Vec<MotorRecord>>;

    /// Number of stored records
    async fn count(&self) -> CoreResult<i64>;
}

#[derive(Clone)]
pub struct SqliteMotorStore {
    pub pool: SqlitePool,
}

impl SqliteMotorStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert records, replacing any existing row with the same id.
    /// Runs in a single transaction; returns the number of rows written.
    pub async fn upsert_many(&self, records: &[MotorRecord]) -> CoreResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut written = 0;

        for record in records {
            let result = sqlx::query(
                r#"
                INSERT OR REPLACE INTO pilihanmotor
                    (id, cc, harga, speed, berat, kapasitas_tangkibensin)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(record.id)
            .bind(record.cc)
            .bind(record.harga)
            .bind(record.speed)
            .bind(record.berat)
            .bind(record.kapasitas_tangkibensin)
            .execute(&mut *tx)
            .await?;
            written += result.rows_affected();
        }

        tx.commit().await?;
        Ok(written)
    }
}

#[async_trait]
impl MotorRepository for SqliteMotorStore {
    async fn fetch_all(&self) -> CoreResult<Vec<MotorRecord>> {
        let rows = sqlx::query_as::<_, MotorRecord>(
            r#"
            SELECT id, cc, harga, speed, berat, kapasitas_tangkibensin
            FROM pilihanmotor
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} motorcycle records", rows.len());
        Ok(rows)
    }

    async fn count(&self) -> CoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pilihanmotor")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Fixed in-memory record set
#[derive(Debug, Clone, Default)]
pub struct MemoryMotorStore {
    records: Vec<MotorRecord>,
}

impl MemoryMotorStore {
    pub fn new(records: Vec<MotorRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl MotorRepository for MemoryMotorStore {
    async fn fetch_all(&self) -> CoreResult<Vec<MotorRecord>> {
        Ok(self.records.clone())
    }

    async fn count(&self) -> CoreResult<i64> {
        Ok(self.records.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::run_migrations;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::path::Path;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("create in-memory sqlite");
        run_migrations(&pool, &Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations"))
            .await
            .expect("apply migrations");
        pool
    }

    fn record(id: i64, cc: i64) -> MotorRecord {
        MotorRecord {
            id,
            cc,
            harga: 20000,
            speed: 120,
            berat: 100,
            kapasitas_tangkibensin: 4,
        }
    }

    #[tokio::test]
    async fn test_sqlite_store_round_trip() {
        let store = SqliteMotorStore::new(memory_pool().await);
        assert_eq!(store.count().await.unwrap(), 0);

        let written = store.upsert_many(&[record(1, 100), record(2, 150)]).await.unwrap();
        assert_eq!(written, 2);

        let mut rows = store.fetch_all().await.unwrap();
        rows.sort_by_key(|r| r.id);
        assert_eq!(rows, vec![record(1, 100), record(2, 150)]);
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_id() {
        let store = SqliteMotorStore::new(memory_pool().await);
        store.upsert_many(&[record(1, 100)]).await.unwrap();
        store.upsert_many(&[record(1, 250)]).await.unwrap();

        let rows = store.fetch_all().await.unwrap();
        assert_eq!(rows, vec![record(1, 250)]);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_memory_store_preserves_order() {
        let store = MemoryMotorStore::new(vec![record(3, 1), record(1, 2)]);
        let ids: Vec<_> = store.fetch_all().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(store.count().await.unwrap(), 2);
    }
}
