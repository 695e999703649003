//! Conversational engine for the HostelNexus assistant
//!
//! Features:
//! - Keyword intent classification over a fixed ordered rule table
//! - Guided complaint capture (title, category, description) driven
//!   through chat turns
//! - Canned responses per intent
//! - Remote generation fallback with a bounded failure path
//! - Per-session transcript with strict insertion ordering

pub mod capture;
pub mod conversation;
pub mod engine;
pub mod intent;
pub mod replies;

pub use capture::{CaptureFlow, CaptureState, CompletedDraft, ComplaintDraft, StepOutcome};
pub use conversation::Conversation;
pub use engine::{ChatEngine, EngineConfig};
pub use intent::{Intent, IntentClassifier};

use thiserror::Error;

/// Engine errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Conversation error: {0}")]
    Conversation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<hostel_nexus_llm::LlmError> for AgentError {
    fn from(err: hostel_nexus_llm::LlmError) -> Self {
        AgentError::Llm(err.to_string())
    }
}

impl From<hostel_nexus_persistence::PersistenceError> for AgentError {
    fn from(err: hostel_nexus_persistence::PersistenceError) -> Self {
        AgentError::Store(err.to_string())
    }
}
