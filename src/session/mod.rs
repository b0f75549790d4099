//! Session View-Models
//!
//! Client-side state plus the operations that mutate it, independent of any
//! rendering. One struct per concern: which screen is shown, which documents
//! are cached, and the chat transcript. All backend interaction goes through
//! the [`GatewayApi`](crate::client::GatewayApi) seam.

pub mod chat;
pub mod documents;
pub mod nav;

pub use chat::ChatTranscript;
pub use documents::DocumentRegistry;
pub use nav::{Navigator, Screen};
