//! Health check HTTP route handlers
//!
//! Provides endpoints for checking the health of the API and its database:
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/live` - Kubernetes-style liveness probe
//! - `GET /health/ready` - Readiness check (pings PostgreSQL)

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::time::Instant;

use crate::error::{ApiError, ApiResult};

/// Shared application state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    /// Database pool checked by the readiness probe
    pub pool: PgPool,
}

impl HealthState {
    /// Create new health state around the database pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Readiness report
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub latency_ms: u64,
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness_probe))
        .route("/ready", get(readiness_probe))
        .with_state(state)
}

/// Simple health check - always returns OK if the server is running
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness probe
///
/// Does not touch the database; that is what readiness is for.
async fn liveness_probe() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness probe
///
/// # Response
/// - 200 OK when PostgreSQL answers `SELECT 1`
/// - 503 Service Unavailable otherwise
async fn readiness_probe(State(state): State<HealthState>) -> ApiResult<Json<ReadinessResponse>> {
    let start = Instant::now();

    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.pool)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Database readiness check failed");
            ApiError::DatabaseUnavailable
        })?;

    Ok(Json(ReadinessResponse {
        status: "ready",
        database: "healthy",
        latency_ms: start.elapsed().as_millis() as u64,
    }))
}
