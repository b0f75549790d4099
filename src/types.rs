//! Core types shared by the gateway, the client, and the session view-models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A document known to the backend.
///
/// Identity is `file_name`, unique within a listing. The backend holds the
/// authoritative copy; anything cached client-side is invalidated by
/// explicit re-fetch, never by local mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// File name, unique within the document list
    pub file_name: String,
    /// URL where the stored file can be retrieved
    pub file_url: String,
}

/// A normalized chat answer from the backend.
///
/// The backend's raw `response` field is polymorphic (a plain string or
/// `{content: string}`); it is decoded once at the backend-client boundary
/// into this shape and never re-parsed downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Answer text
    pub response: String,
    /// Source references backing the answer, in backend order
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Who authored a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("user"),
            Role::Assistant => f.write_str("assistant"),
        }
    }
}

/// Stable identifier for a transcript message, assigned at creation.
///
/// Pending placeholders are replaced by id rather than by position, so the
/// transcript stays correct even if sends ever overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in a chat transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Stable message identifier
    pub id: MessageId,
    /// Author
    pub role: Role,
    /// Message text
    pub content: String,
    /// Source references (assistant messages only)
    #[serde(default)]
    pub sources: Vec<String>,
    /// True while this is a pending placeholder awaiting the backend reply
    #[serde(default)]
    pub is_loading: bool,
    /// Creation time
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a finished message
    pub fn new(id: MessageId, role: Role, content: impl Into<String>) -> Self {
        Self {
            id,
            role,
            content: content.into(),
            sources: Vec::new(),
            is_loading: false,
            timestamp: Utc::now(),
        }
    }

    /// Create a pending assistant placeholder
    pub fn placeholder(id: MessageId) -> Self {
        Self {
            id,
            role: Role::Assistant,
            content: String::new(),
            sources: Vec::new(),
            is_loading: true,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_reply_deserializes_without_sources() {
        let reply: ChatReply = serde_json::from_str(r#"{"response":"hi"}"#).unwrap();
        assert_eq!(reply.response, "hi");
        assert!(reply.sources.is_empty());
    }

    #[test]
    fn chat_reply_preserves_source_order() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"response":"hi","sources":["b","a"]}"#).unwrap();
        assert_eq!(reply.sources, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            r#""assistant""#
        );
    }

    #[test]
    fn placeholder_is_loading_assistant_message() {
        let msg = ChatMessage::placeholder(MessageId(7));
        assert_eq!(msg.id, MessageId(7));
        assert_eq!(msg.role, Role::Assistant);
        assert!(msg.is_loading);
        assert!(msg.content.is_empty());
    }
}
