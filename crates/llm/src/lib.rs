//! Remote text-generation client for the HostelNexus assistant
//!
//! Features:
//! - Content/role types for the generateContent wire format
//! - Fixed system instruction describing the assistant persona
//! - `GenerationClient` trait so the engine can be tested with a mock
//! - `GeminiClient` HTTP implementation with a bounded failure path

pub mod client;
pub mod prompt;

pub use client::{GeminiClient, GenerationClient};
pub use prompt::{Message, PromptBuilder, Role, SYSTEM_INSTRUCTION};

use thiserror::Error;

/// Generation service errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Request failed: {0}")]
    Http(String),

    #[error("Service returned error: {0}")]
    Api(String),

    #[error("No usable text in response")]
    EmptyResponse,
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        LlmError::Http(e.to_string())
    }
}
