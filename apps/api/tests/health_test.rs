//! Integration tests for health check endpoints
//!
//! Runs the full application router against a database that cannot be
//! reached, so only the readiness probe depends on PostgreSQL.

mod common;

use axum::{body::Body, http::Request, http::StatusCode};
use common::{body_string, offline_app, production_config, send, test_config};
use discotheque_api::routes::BANNER;

#[tokio::test]
async fn test_root_endpoint() {
    let app = offline_app(&test_config());

    let response = send(app, Request::builder().uri("/").body(Body::empty()).unwrap()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, BANNER);
}

#[tokio::test]
async fn test_simple_health_check() {
    let app = offline_app(&test_config());

    let response = send(
        app,
        Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = offline_app(&test_config());

    let response = send(
        app,
        Request::builder()
            .uri("/health/live")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "alive");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_readiness_probe_without_database() {
    let app = offline_app(&test_config());

    let response = send(
        app,
        Request::builder()
            .uri("/health/ready")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["code"], "DATABASE_UNAVAILABLE");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = offline_app(&test_config());

    let response = send(
        app,
        Request::builder()
            .uri("/nonexistent")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_playground_served_in_development() {
    let app = offline_app(&test_config());

    let response = send(
        app,
        Request::builder()
            .uri("/graphql/playground")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("/graphql"));
}

#[tokio::test]
async fn test_playground_hidden_in_production() {
    let app = offline_app(&production_config());

    let response = send(
        app,
        Request::builder()
            .uri("/graphql/playground")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
