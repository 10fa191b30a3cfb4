// tests/test_helpers.rs
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use sqlx::sqlite::SqlitePoolOptions;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;

use pilihanmotor::AppState;
use pilihanmotor::api::http::api_routes;
use pilihanmotor::motor::{MemoryMotorStore, MotorRecord, SqliteMotorStore};
use pilihanmotor::server::run_migrations;

pub fn motor(id: i64, cc: i64, harga: i64, speed: i64, berat: i64, tank: i64) -> MotorRecord {
    MotorRecord {
        id,
        cc,
        harga,
        speed,
        berat,
        kapasitas_tangkibensin: tank,
    }
}

/// A small showroom with distinct scores under both methods
pub fn showroom() -> Vec<MotorRecord> {
    vec![
        motor(1, 110, 17000, 100, 95, 4),
        motor(2, 155, 32000, 135, 118, 6),
        motor(3, 250, 60000, 160, 150, 11),
        motor(4, 125, 21000, 115, 102, 5),
        motor(5, 160, 30000, 140, 130, 12),
    ]
}

/// `n` records with ids 1..=n
pub fn numbered(n: i64) -> Vec<MotorRecord> {
    (1..=n).map(|id| motor(id, 100 + id, 20000, 120, 100, 4)).collect()
}

pub fn app_with_state(state: AppState) -> Router {
    api_routes().with_state(Arc::new(state))
}

pub fn memory_app(records: Vec<MotorRecord>) -> Router {
    app_with_state(AppState::new(Arc::new(MemoryMotorStore::new(records))))
}

/// In-memory SQLite with migrations applied and `records` inserted
pub async fn sqlite_store(records: &[MotorRecord]) -> SqliteMotorStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("create in-memory sqlite");
    run_migrations(&pool, &Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations"))
        .await
        .expect("apply migrations");

    let store = SqliteMotorStore::new(pool);
    store.upsert_many(records).await.expect("seed records");
    store
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
