use crate::create_success_response;
use axum::{routing::get, Json, Router};
use knowledge_common::ApiResponse;
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
}

#[derive(serde::Serialize)]
struct HealthStatus {
    status: String,
    service: String,
    version: String,
}

// Basic health check endpoint
async fn health_check() -> Json<ApiResponse<HealthStatus>> {
    debug!("Health check requested");

    let health = HealthStatus {
        status: "UP".to_string(),
        service: "knowledge-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    create_success_response(health)
}

// Kubernetes readiness probe. The retriever needs no warm-up, so the
// service is ready as soon as it is serving requests.
async fn readiness_check() -> Json<serde_json::Value> {
    debug!("Readiness check requested");

    Json(json!({
        "status": "ready",
        "timestamp": chrono::Utc::now()
    }))
}

// Kubernetes liveness probe
async fn liveness_check() -> Json<serde_json::Value> {
    debug!("Liveness check requested");

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Json(json!({
        "status": "alive",
        "timestamp": chrono::Utc::now(),
        "epoch_seconds": now
    }))
}
