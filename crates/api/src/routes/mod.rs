pub mod fallback;
pub mod health;
pub mod knowledge;

use axum::Router;
use knowledge_core::Retriever;
use std::sync::Arc;

pub fn create_routes(retriever: Arc<Retriever>) -> Router {
    Router::new()
        // Health check routes
        .nest("/health", health::routes())

        // Circuit breaker fallback routes
        .nest("/fallback", fallback::routes())

        // Knowledge retrieval endpoints
        .nest("/api/v1/knowledge", knowledge::routes(retriever))
}

// Fallback handler for unmatched routes
pub async fn not_found_handler() -> crate::error::ApiError {
    crate::error::ApiError::CoreService(knowledge_common::KnowledgeError::NotFound(
        "Resource not found".to_string(),
    ))
}
