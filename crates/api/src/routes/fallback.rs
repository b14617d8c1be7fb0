use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

pub fn routes() -> Router {
    Router::new().route("/knowledge", get(knowledge_fallback))
}

// Served by upstream gateways when the retrieval backend trips their
// circuit breaker.
async fn knowledge_fallback() -> impl IntoResponse {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({
            "status": "SERVICE_UNAVAILABLE",
            "message": "Knowledge service is temporarily unavailable. Please try again later.",
            "service": "knowledge",
            "timestamp": chrono::Utc::now()
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_knowledge_fallback_returns_503() {
        let app = routes();

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/knowledge")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["status"], "SERVICE_UNAVAILABLE");
        assert_eq!(body["service"], "knowledge");
    }
}
