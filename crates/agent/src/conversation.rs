//! Session transcript
//!
//! An append-only, insertion-ordered message log with ids that are
//! monotonic within the session. Messages are never reordered or edited
//! after the fact.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use hostel_nexus_core::ChatMessage;

use crate::replies;

/// Per-session transcript
pub struct Conversation {
    messages: Mutex<Vec<ChatMessage>>,
    next_id: AtomicU64,
}

impl Conversation {
    /// Create a transcript seeded with the assistant greeting
    pub fn new() -> Self {
        let conversation = Self {
            messages: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        };
        conversation.push_bot(replies::GREETING_SEED);
        conversation
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Append a user message
    pub fn push_user(&self, text: impl Into<String>, complaint_flagged: bool) -> ChatMessage {
        let mut message = ChatMessage::user(self.next_id(), text);
        if complaint_flagged {
            message = message.flagged();
        }
        self.messages.lock().push(message.clone());
        message
    }

    /// Append a bot message
    pub fn push_bot(&self, text: impl Into<String>) -> ChatMessage {
        let message = ChatMessage::bot(self.next_id(), text);
        self.messages.lock().push(message.clone());
        message
    }

    /// Snapshot of the transcript in insertion order
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.lock().clone()
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    /// Most recent message
    pub fn last(&self) -> Option<ChatMessage> {
        self.messages.lock().last().cloned()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
