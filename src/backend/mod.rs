//! Backend Collaborator Layer
//!
//! The external document/chat service is consumed over plain HTTP. This
//! module holds the static route table and the typed client that decodes the
//! backend's success and error bodies exactly once, at this boundary.

pub mod client;
pub mod routes;

pub use client::{BackendClient, BackendError};
pub use routes::BackendRoutes;
