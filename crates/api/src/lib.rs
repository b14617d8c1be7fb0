pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;

use axum::Json;
use knowledge_common::{ApiResponse, KnowledgeError};

pub use server::ApiServer;

// Re-export shared types
pub use knowledge_common;
pub use knowledge_core;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub rate_limit_requests_per_minute: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8084,
            cors_origins: vec!["*".to_string()],
            rate_limit_requests_per_minute: 60,
        }
    }
}

impl ApiConfig {
    /// Builds a configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> knowledge_common::Result<Self> {
        let defaults = Self::default();

        let host = std::env::var("KNOWLEDGE_HOST").unwrap_or(defaults.host);

        let port = match std::env::var("KNOWLEDGE_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                KnowledgeError::Configuration(format!("Invalid KNOWLEDGE_PORT: {}", raw))
            })?,
            Err(_) => defaults.port,
        };

        let cors_origins = match std::env::var("KNOWLEDGE_CORS_ORIGINS") {
            Ok(raw) => raw
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            Err(_) => defaults.cors_origins,
        };

        let rate_limit_requests_per_minute = match std::env::var("KNOWLEDGE_RATE_LIMIT_PER_MINUTE")
        {
            Ok(raw) => raw.parse::<u32>().map_err(|_| {
                KnowledgeError::Configuration(format!(
                    "Invalid KNOWLEDGE_RATE_LIMIT_PER_MINUTE: {}",
                    raw
                ))
            })?,
            Err(_) => defaults.rate_limit_requests_per_minute,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            rate_limit_requests_per_minute,
        })
    }
}

// Common API utilities
pub fn create_success_response<T: serde::Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}

pub fn create_error_response(message: String) -> Json<ApiResponse<()>> {
    Json(ApiResponse::error(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_config_default() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8084);
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
        assert_eq!(config.rate_limit_requests_per_minute, 60);
    }

    #[test]
    fn test_success_response_creation() {
        let data = json!({"message": "test"});
        let response = create_success_response(data);
        assert!(response.0.success);
    }

    #[test]
    fn test_error_response_creation() {
        let response = create_error_response("Test error".to_string());
        assert!(!response.0.success);
        assert_eq!(response.0.error, Some("Test error".to_string()));
    }

    #[test]
    fn test_from_env_rejects_invalid_port() {
        std::env::set_var("KNOWLEDGE_PORT", "not-a-port");
        let result = ApiConfig::from_env();
        std::env::remove_var("KNOWLEDGE_PORT");

        assert!(matches!(
            result,
            Err(KnowledgeError::Configuration(_))
        ));
    }
}
