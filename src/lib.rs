//! Docgate: Document Chat Gateway
//!
//! A browser-facing gateway in front of a document analysis backend:
//! - Thin relay for chat, upload, listing, and deletion
//! - Uploads forwarded byte-for-byte, multipart boundary intact
//! - Backend error bodies decoded once and relayed with their status
//! - Embedded single-page UI plus a terminal client over the same API
//! - Session view-models (navigation, document cache, chat transcript)
//!   usable without any rendering layer

pub mod backend;
pub mod client;
pub mod config;
pub mod gateway;
pub mod session;
pub mod types;

pub use config::Config;
pub use types::*;
