//! Gateway Request Handlers
//!
//! Handlers that re-issue browser requests to the backend and relay the
//! result. Failure handling follows one taxonomy: missing client input is a
//! 4xx naming the field, a backend-reported failure is relayed with its
//! status and message, and transport failures become a generic 500 whose
//! detail is logged server-side only. Listing is the deliberate exception:
//! an unreachable backend must look identical to an empty library.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::backend::{BackendClient, BackendError};

use super::types::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Chat endpoint: forwards the query as JSON and relays the normalized reply
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    debug!("Chat request: {} chars", request.query.len());

    match state.backend.chat(&request.query).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(BackendError::Backend { status, message }) => {
            warn!("Backend rejected chat: {} - {}", status, message);
            (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(ErrorResponse::new(message)),
            )
                .into_response()
        }
        Err(e) => {
            error!("Chat request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to get response from server")),
            )
                .into_response()
        }
    }
}

/// Upload endpoint: forwards the multipart body unchanged.
///
/// No file-type or size validation happens at this layer; the backend's
/// verdict (status and JSON body) is relayed as-is.
pub async fn upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    match state.backend.upload(content_type, body.to_vec()).await {
        Ok((status, body)) => (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(body),
        )
            .into_response(),
        Err(e) => {
            error!("Upload request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Internal server error")),
            )
                .into_response()
        }
    }
}

/// List endpoint.
///
/// Every failure path still answers 200 with an empty listing: on a fresh
/// install the backend may not be running yet, and that must not surface as
/// error UI.
pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.backend.list().await {
        Ok(documents) => (StatusCode::OK, Json(ListResponse { documents })).into_response(),
        Err(e) => {
            warn!("Listing documents failed, answering with empty library: {}", e);
            (
                StatusCode::OK,
                Json(ListResponse {
                    documents: Vec::new(),
                }),
            )
                .into_response()
        }
    }
}

/// Delete endpoint for one document.
///
/// The path extractor percent-decodes the segment, so `filename` is already
/// the raw name; the backend route table re-encodes it exactly once.
pub async fn delete_document(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> impl IntoResponse {
    match state.backend.delete(&filename).await {
        Ok(_) => (StatusCode::OK, Json(DeleteResponse::deleted(&filename))).into_response(),
        Err(BackendError::Backend { status, message }) => {
            warn!("Backend rejected delete of '{}': {} - {}", filename, status, message);
            (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(ErrorResponse::new(message)),
            )
                .into_response()
        }
        Err(e) => {
            error!("Delete request for '{}' failed: {}", filename, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Internal server error during deletion")),
            )
                .into_response()
        }
    }
}

/// Delete endpoint reached without a filename segment
pub async fn delete_missing() -> impl IntoResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::missing_filename()),
    )
}
