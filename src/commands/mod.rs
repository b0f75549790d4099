//! CLI command handlers

pub mod chat;
pub mod documents;
pub mod serve;
