//! Chat Transcript
//!
//! Append-only message log with stable identifiers. Sending a question pushes
//! the user's message plus a loading placeholder; the placeholder is later
//! replaced in place by its id, never by position, so a reply can only ever
//! land on the message it belongs to.

use tracing::warn;

use crate::client::{ClientError, GatewayApi};
use crate::types::{ChatMessage, ChatReply, MessageId, Role};

/// Fixed reply shown when a send fails for any reason
pub const SEND_FAILED_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

/// The conversation so far plus the in-flight request, if any
#[derive(Debug, Default)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_id: u64,
    pending: Option<MessageId>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in send order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a question is awaiting its answer
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    fn allocate_id(&mut self) -> MessageId {
        self.next_id += 1;
        MessageId(self.next_id)
    }

    /// Record an outgoing question. Appends the user message and a loading
    /// placeholder and returns the placeholder's id. Returns None while a
    /// previous question is still awaiting its answer.
    pub fn begin_send(&mut self, text: &str) -> Option<MessageId> {
        if self.pending.is_some() {
            return None;
        }
        let user_id = self.allocate_id();
        self.messages
            .push(ChatMessage::new(user_id, Role::User, text.to_string()));
        let placeholder_id = self.allocate_id();
        self.messages.push(ChatMessage::placeholder(placeholder_id));
        self.pending = Some(placeholder_id);
        Some(placeholder_id)
    }

    /// Replace the placeholder identified by `id` with the outcome of its
    /// request. A reply for an id no longer in the transcript is dropped.
    pub fn resolve(&mut self, id: MessageId, outcome: Result<ChatReply, ClientError>) {
        let Some(message) = self.messages.iter_mut().find(|m| m.id == id) else {
            warn!("Dropping reply for unknown message {}", id);
            return;
        };
        match outcome {
            Ok(reply) => {
                message.content = reply.response;
                message.sources = reply.sources;
            }
            Err(err) => {
                warn!("Chat request failed: {}", err);
                message.content = SEND_FAILED_MESSAGE.to_string();
                message.sources = Vec::new();
            }
        }
        message.is_loading = false;
        if self.pending == Some(id) {
            self.pending = None;
        }
    }

    /// Send one question through the gateway and fold the answer into the
    /// transcript. Returns false when a question was already in flight.
    pub async fn send(&mut self, api: &dyn GatewayApi, text: &str) -> bool {
        let Some(id) = self.begin_send(text) else {
            return false;
        };
        let outcome = api.chat(text).await;
        self.resolve(id, outcome);
        true
    }
}

// ============================================================================
// Tests
// ============================================================================
