//! Gateway API Client
//!
//! The terminal client and the session view-models reach a running gateway
//! through the [`GatewayApi`] trait, so tests can substitute stubs for the
//! network.

pub mod http;

pub use http::ApiClient;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{ChatReply, Document};

/// Errors from a gateway round trip
#[derive(Debug, Error)]
pub enum ClientError {
    /// Gateway unreachable or the request failed in transit
    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Gateway answered with an error envelope
    #[error("gateway returned {status}: {message}")]
    Rejected { status: u16, message: String },
    /// Gateway answered with an unparseable body
    #[error("unparseable gateway response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Operations the gateway exposes to its clients
#[async_trait]
pub trait GatewayApi: Send + Sync {
    /// Ask a question about the uploaded documents
    async fn chat(&self, query: &str) -> Result<ChatReply, ClientError>;

    /// Fetch the current document listing
    async fn list(&self) -> Result<Vec<Document>, ClientError>;

    /// Upload one file as multipart form data
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), ClientError>;

    /// Delete one document by filename
    async fn delete(&self, filename: &str) -> Result<(), ClientError>;
}
