//! Backend HTTP Client
//!
//! Typed reqwest client for the backend's operations. The backend's error
//! shape (`{detail: string}`, sometimes absent) and its polymorphic chat
//! response body are decoded here, once, and never re-parsed downstream.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::BackendConfig;
use crate::types::{ChatReply, Document};

use super::routes::BackendRoutes;

/// Errors from a backend round trip
#[derive(Debug, Error)]
pub enum BackendError {
    /// Backend reachable but reported a failure
    #[error("backend returned {status}: {message}")]
    Backend { status: u16, message: String },
    /// Backend unreachable or the request timed out
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Backend responded with an unparseable body
    #[error("unparseable backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BackendError {
    /// Status code the backend reported, if this is a reported failure
    pub fn reported_status(&self) -> Option<u16> {
        match self {
            BackendError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body shape the backend uses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Raw chat response as the backend sends it
#[derive(Debug, Deserialize)]
struct RawChatReply {
    response: ResponseText,
    #[serde(default)]
    sources: Vec<String>,
}

/// The backend's `response` field is either a plain string or an object
/// carrying a `content` field, depending on the model adapter behind it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResponseText {
    Plain(String),
    Wrapped { content: String },
}

impl From<RawChatReply> for ChatReply {
    fn from(raw: RawChatReply) -> Self {
        let response = match raw.response {
            ResponseText::Plain(text) => text,
            ResponseText::Wrapped { content } => content,
        };
        ChatReply {
            response,
            sources: raw.sources,
        }
    }
}

/// Listing body; an absent `documents` field reads as an empty list
#[derive(Debug, Deserialize)]
struct ListBody {
    #[serde(default)]
    documents: Vec<Document>,
}

/// HTTP client for the backend collaborator
#[derive(Debug)]
pub struct BackendClient {
    http: Client,
    routes: BackendRoutes,
}

impl BackendClient {
    /// Create a client with the configured base URL and timeout
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            routes: BackendRoutes::new(&config.base_url),
        })
    }

    /// The route table this client resolves against
    pub fn routes(&self) -> &BackendRoutes {
        &self.routes
    }

    /// Turn a non-2xx response into a reported failure, preferring the
    /// backend's `detail` message when the body carries one.
    async fn reported_failure(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        let message = match response.json::<ErrorBody>().await {
            Ok(ErrorBody {
                detail: Some(detail),
            }) => detail,
            _ => format!("HTTP error! status: {}", status),
        };
        BackendError::Backend { status, message }
    }

    /// Ask the backend a question about the uploaded documents
    pub async fn chat(&self, query: &str) -> Result<ChatReply, BackendError> {
        debug!("Forwarding chat query ({} chars)", query.len());
        let response = self
            .http
            .post(self.routes.chat())
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::reported_failure(response).await);
        }
        let body = response.text().await?;
        let raw: RawChatReply = serde_json::from_str(&body)?;
        Ok(raw.into())
    }

    /// Fetch the current document listing
    pub async fn list(&self) -> Result<Vec<Document>, BackendError> {
        let response = self.http.get(self.routes.list()).send().await?;
        if !response.status().is_success() {
            return Err(Self::reported_failure(response).await);
        }
        let body = response.text().await?;
        let list: ListBody = serde_json::from_str(&body)?;
        Ok(list.documents)
    }

    /// Delete one document by filename
    pub async fn delete(&self, filename: &str) -> Result<serde_json::Value, BackendError> {
        debug!("Forwarding delete for '{}'", filename);
        let response = self.http.delete(self.routes.delete(filename)).send().await?;
        if !response.status().is_success() {
            return Err(Self::reported_failure(response).await);
        }
        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }

    /// Forward a multipart upload body byte-for-byte.
    ///
    /// No re-encoding and no content inspection happen here; the original
    /// `Content-Type` (with its multipart boundary) is passed along. Any HTTP
    /// response from the backend is `Ok((status, body))` so the caller can
    /// relay the backend's verdict; only transport and parse failures are
    /// `Err`.
    pub async fn upload(
        &self,
        content_type: Option<&str>,
        body: Vec<u8>,
    ) -> Result<(u16, serde_json::Value), BackendError> {
        debug!("Forwarding upload ({} bytes)", body.len());
        let mut request = self.http.post(self.routes.upload()).body(body);
        if let Some(content_type) = content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let value = serde_json::from_str(&text)?;
        Ok((status, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_reply_plain_string_normalizes() {
        let raw: RawChatReply =
            serde_json::from_str(r#"{"response":"hi","sources":["a","b"]}"#).unwrap();
        let reply: ChatReply = raw.into();
        assert_eq!(reply.response, "hi");
        assert_eq!(reply.sources, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn raw_reply_wrapped_content_normalizes() {
        let raw: RawChatReply =
            serde_json::from_str(r#"{"response":{"content":"hello"}}"#).unwrap();
        let reply: ChatReply = raw.into();
        assert_eq!(reply.response, "hello");
        assert!(reply.sources.is_empty());
    }

    #[test]
    fn error_body_detail_is_optional() {
        let with: ErrorBody = serde_json::from_str(r#"{"detail":"bad"}"#).unwrap();
        assert_eq!(with.detail.as_deref(), Some("bad"));
        let without: ErrorBody = serde_json::from_str(r#"{"message":"other"}"#).unwrap();
        assert!(without.detail.is_none());
    }

    #[test]
    fn list_body_defaults_to_empty() {
        let body: ListBody = serde_json::from_str("{}").unwrap();
        assert!(body.documents.is_empty());
    }

    #[test]
    fn reported_status_only_for_backend_errors() {
        let err = BackendError::Backend {
            status: 503,
            message: "down".to_string(),
        };
        assert_eq!(err.reported_status(), Some(503));

        let decode: BackendError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert_eq!(decode.reported_status(), None);
    }
}
