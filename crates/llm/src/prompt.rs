//! Prompt assembly for the generation service

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed system instruction sent with every generation request
pub const SYSTEM_INSTRUCTION: &str = "You are an AI assistant for HostelNexus, a hostel management system. \
Help students with their queries about hostel facilities, mess menu, room bookings, \
and complaints. Be friendly, helpful, and concise. \
If users want to file a complaint, guide them through the process and recognize complaint intent. \
For room related issues, provide guidance on the room management section. \
For mess related queries, refer to the mess menu section. \
Provide practical answers based on typical hostel management scenarios.";

/// Message role on the generateContent wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Model,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Model => write!(f, "model"),
        }
    }
}

/// One conversation turn as sent to the generation service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Builder assembling the full prompt for one generation call
pub struct PromptBuilder {
    messages: Vec<Message>,
}

impl PromptBuilder {
    /// Create a builder seeded with the fixed system instruction
    pub fn new() -> Self {
        Self {
            messages: vec![Message::system(SYSTEM_INSTRUCTION)],
        }
    }

    /// Append the conversation history in order
    pub fn with_history(mut self, history: &[Message]) -> Self {
        self.messages.extend(history.iter().cloned());
        self
    }

    /// Append the current user message
    pub fn user_message(mut self, text: impl Into<String>) -> Self {
        self.messages.push(Message::user(text));
        self
    }

    /// Build the final message list
    pub fn build(self) -> Vec<Message> {
        self.messages
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_instruction_first() {
        let messages = PromptBuilder::new().user_message("Hello").build();
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].text.contains("HostelNexus"));
        assert_eq!(messages[1].role, Role::User);
    }

    #[test]
    fn test_history_preserves_order() {
        let history = vec![Message::user("hi"), Message::model("hello!")];
        let messages = PromptBuilder::new()
            .with_history(&history)
            .user_message("what now?")
            .build();

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[2].role, Role::Model);
        assert_eq!(messages[3].text, "what now?");
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&Role::Model).unwrap();
        assert_eq!(json, "\"model\"");
    }
}
