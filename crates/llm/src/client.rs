//! Generation service client
//!
//! One attempt per call with a fixed timeout; no retry. Callers are
//! expected to degrade to a local message when this returns an error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use hostel_nexus_config::GenerationConfig;

use crate::prompt::Message;
use crate::LlmError;

/// Abstraction over the remote text-generation service
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generate a reply for the given ordered message list (system
    /// instruction included)
    async fn generate(&self, messages: &[Message]) -> Result<String, LlmError>;
}

/// generateContent request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: RequestGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

/// generateContent response body
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

/// HTTP client for a Gemini-style generateContent API
pub struct GeminiClient {
    http_client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f32,
    max_output_tokens: u32,
}

impl GeminiClient {
    /// Create a client from configuration
    ///
    /// Returns `None` when no API key is configured, so callers fall back
    /// to local responses instead of issuing requests that cannot succeed.
    pub fn from_config(config: &GenerationConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;

        Some(Self {
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_seconds))
                .build()
                .unwrap_or_default(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }

    /// Get the configured model name
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }

    fn build_request(&self, messages: &[Message]) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: messages
                .iter()
                .map(|m| Content {
                    role: m.role.to_string(),
                    parts: vec![Part {
                        text: m.text.clone(),
                    }],
                })
                .collect(),
            generation_config: RequestGenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        }
    }

    /// Pull the generated text out of a response, if any
    fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
        if let Some(error) = response.error {
            return Err(LlmError::Api(error.message));
        }

        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        Ok(text)
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, messages: &[Message]) -> Result<String, LlmError> {
        let request = self.build_request(messages);

        tracing::debug!(
            model = %self.model,
            contents = messages.len(),
            "Calling generation service"
        );

        let response = self
            .http_client
            .post(self.request_url())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Generation service returned error: {}", body);
            return Err(LlmError::Api(format!("HTTP {}", status)));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = Self::extract_text(parsed)?;

        tracing::debug!(chars = text.len(), "Generation service replied");
        Ok(text)
    }
}
