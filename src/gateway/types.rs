//! Gateway Request/Response Types
//!
//! JSON envelopes for the browser-facing API.

use serde::{Deserialize, Serialize};

use crate::types::Document;

/// Chat request body from the browser
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The question to ask
    pub query: String,
    /// Whether to ground the answer in uploaded documents. Accepted for
    /// forward compatibility; the backend currently always grounds.
    #[serde(
        default,
        rename = "useDocuments",
        skip_serializing_if = "Option::is_none"
    )]
    pub use_documents: Option<bool>,
}

/// Document listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// Current documents; empty when the backend is empty or unreachable
    pub documents: Vec<Document>,
}

/// Delete success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always true on the success path
    pub success: bool,
    /// Human-readable confirmation naming the deleted file
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted(filename: &str) -> Self {
        Self {
            success: true,
            message: format!("Successfully deleted {}", filename),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Whether the gateway is up
    pub healthy: bool,
    /// Gateway version
    pub version: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn missing_filename() -> Self {
        Self::new("Filename is required")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_accepts_query_only() {
        let req: ChatRequest = serde_json::from_str(r#"{"query":"what is this?"}"#).unwrap();
        assert_eq!(req.query, "what is this?");
        assert!(req.use_documents.is_none());
    }

    #[test]
    fn chat_request_accepts_use_documents_flag() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"query":"q","useDocuments":true}"#).unwrap();
        assert_eq!(req.use_documents, Some(true));
    }

    #[test]
    fn delete_response_names_the_file() {
        let resp = DeleteResponse::deleted("notes.pdf");
        assert!(resp.success);
        assert_eq!(resp.message, "Successfully deleted notes.pdf");
    }

    #[test]
    fn error_response_serializes_error_field() {
        let json = serde_json::to_string(&ErrorResponse::missing_filename()).unwrap();
        assert_eq!(json, r#"{"error":"Filename is required"}"#);
    }
}
