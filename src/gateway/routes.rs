//! Gateway Route Definitions
//!
//! Browser-facing routes mirroring the backend's operations under `/api`.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{self, AppState};
use super::ui;

/// Create the gateway router with all routes
pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/chat", post(handlers::chat))
        .route("/upload", post(handlers::upload))
        .route("/list", get(handlers::list))
        // A delete without a filename is a client error, not a 404
        .route("/delete", delete(handlers::delete_missing))
        .route("/delete/:filename", delete(handlers::delete_document))
        .with_state(app_state);

    Router::new().route("/", get(ui::index)).nest("/api", api)
}
