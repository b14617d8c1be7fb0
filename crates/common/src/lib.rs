use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Retrieval types shared between the core and the API surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalRequest {
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RetrievalOutcome {
    pub query: String,
    pub results: Vec<String>,
    pub total: usize,
}

impl RetrievalOutcome {
    pub fn new(query: String, results: Vec<String>) -> Self {
        let total = results.len();
        Self {
            query,
            results,
            total,
        }
    }
}

// Error types
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, KnowledgeError>;

// API response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieval_outcome_counts_results() {
        let outcome = RetrievalOutcome::new(
            "rust".to_string(),
            vec!["Result for rust".to_string()],
        );

        assert_eq!(outcome.query, "rust");
        assert_eq!(outcome.total, 1);
        assert_eq!(outcome.results.len(), outcome.total);
    }

    #[test]
    fn test_retrieval_outcome_serialization() {
        let outcome = RetrievalOutcome::new("q".to_string(), vec!["Result for q".to_string()]);
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["query"], "q");
        assert_eq!(json["total"], 1);
        assert_eq!(json["results"][0], "Result for q");
    }

    #[test]
    fn test_api_response() {
        let response = ApiResponse::success("data");
        assert!(response.success);
        assert_eq!(response.data, Some("data"));

        let error_response: ApiResponse<String> = ApiResponse::error("error".to_string());
        assert!(!error_response.success);
        assert_eq!(error_response.error, Some("error".to_string()));
    }

    #[test]
    fn test_error_display() {
        let err = KnowledgeError::Configuration("bad port".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad port");

        let err = KnowledgeError::NotFound("no such route".to_string());
        assert_eq!(err.to_string(), "Not found: no such route");
    }
}
