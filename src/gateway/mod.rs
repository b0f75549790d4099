//! Browser-Facing Gateway
//!
//! Axum server exposing the `/api/*` surface the browser UI talks to. Every
//! handler's job is translating a browser request into a backend request and
//! back; no retrieval, storage, or generation logic lives here.

pub mod handlers;
pub mod routes;
pub mod server;
pub mod types;
pub mod ui;

pub use server::GatewayServer;
