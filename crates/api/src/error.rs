use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Core service error: {0}")]
    CoreService(#[from] knowledge_common::KnowledgeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message, error_code) = match self {
            ApiError::RateLimit => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded".to_string(),
                "RATE_LIMIT",
            ),
            ApiError::CoreService(err) => match err {
                knowledge_common::KnowledgeError::NotFound(msg) => {
                    (StatusCode::NOT_FOUND, msg, "NOT_FOUND")
                }
                other => {
                    error!("Core service error: {}", other);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                        "INTERNAL_ERROR",
                    )
                }
            },
        };

        let response_body = json!({
            "success": false,
            "error": error_message,
            "error_code": error_code,
            "timestamp": chrono::Utc::now()
        });

        (status, Json(response_body)).into_response()
    }
}

// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
