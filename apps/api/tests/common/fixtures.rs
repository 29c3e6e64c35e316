//! Test fixtures for database-backed integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use discotheque_api::graphql::{CatalogSchema, SchemaBuilder};
use sqlx::postgres::{PgPool, PgPoolOptions};

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Suffix making names unique across tests and test runs
pub fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("{}-{}", nanos, COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Connect to `DATABASE_URL` and bring the schema up to date
pub async fn live_pool() -> PgPool {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("failed to connect to DATABASE_URL");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations should apply");

    pool
}

/// Schema backed by the live database
pub async fn live_schema() -> CatalogSchema {
    SchemaBuilder::new(live_pool().await).build()
}
