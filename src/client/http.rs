//! HTTP implementation of the gateway API

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::debug;

use crate::gateway::types::{ChatRequest, ErrorResponse, ListResponse};
use crate::types::{ChatReply, Document};

use super::{ClientError, GatewayApi};

/// Client for a running gateway's `/api` surface
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    /// Create a client against a gateway base URL (e.g., "http://127.0.0.1:3000")
    pub fn new(gateway_url: &str) -> Self {
        Self {
            http: Client::new(),
            base: gateway_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base, path)
    }

    /// Turn a non-2xx gateway response into a rejection, preferring the
    /// error envelope's message when the body carries one.
    async fn rejected(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP error! status: {}", status),
        };
        ClientError::Rejected { status, message }
    }
}

#[async_trait]
impl GatewayApi for ApiClient {
    async fn chat(&self, query: &str) -> Result<ChatReply, ClientError> {
        let request = ChatRequest {
            query: query.to_string(),
            use_documents: None,
        };
        let response = self
            .http
            .post(self.url("/chat"))
            .json(&request)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejected(response).await);
        }
        let body = response.text().await?;
        let reply = serde_json::from_str(&body)?;
        Ok(reply)
    }

    async fn list(&self) -> Result<Vec<Document>, ClientError> {
        let response = self.http.get(self.url("/list")).send().await?;
        if !response.status().is_success() {
            return Err(Self::rejected(response).await);
        }
        let body = response.text().await?;
        let list: ListResponse = serde_json::from_str(&body)?;
        Ok(list.documents)
    }

    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<(), ClientError> {
        debug!("Uploading '{}' ({} bytes)", file_name, bytes.len());
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_string()));
        let response = self
            .http
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejected(response).await);
        }
        Ok(())
    }

    async fn delete(&self, filename: &str) -> Result<(), ClientError> {
        let url = self.url(&format!("/delete/{}", urlencoding::encode(filename)));
        let response = self.http.delete(url).send().await?;
        if !response.status().is_success() {
            return Err(Self::rejected(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_api_prefix() {
        let client = ApiClient::new("http://127.0.0.1:3000");
        assert_eq!(client.url("/list"), "http://127.0.0.1:3000/api/list");
    }

    #[test]
    fn url_tolerates_trailing_slash() {
        let client = ApiClient::new("http://127.0.0.1:3000/");
        assert_eq!(client.url("/chat"), "http://127.0.0.1:3000/api/chat");
    }
}
