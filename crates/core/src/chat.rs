//! Chat transcript types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// A single transcript entry
///
/// Immutable once created. The id is monotonic within one session, so
/// insertion order is display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    /// Set on user messages that entered or advanced complaint capture
    #[serde(default)]
    pub complaint_flagged: bool,
}

impl ChatMessage {
    /// Create a user message
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            complaint_flagged: false,
        }
    }

    /// Create a bot message
    pub fn bot(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
            complaint_flagged: false,
        }
    }

    /// Mark this message as part of a complaint-capture exchange
    pub fn flagged(mut self) -> Self {
        self.complaint_flagged = true;
        self
    }

    /// Is this a user message?
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
