//! Application state
//!
//! Shared state across all handlers.

use std::sync::Arc;
use std::time::Duration;

use hostel_nexus_agent::{ChatEngine, EngineConfig};
use hostel_nexus_config::Settings;
use hostel_nexus_llm::{GeminiClient, GenerationClient};
use hostel_nexus_persistence::PersistenceLayer;

use crate::session::SessionManager;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: Arc<Settings>,
    /// Session manager
    pub sessions: Arc<SessionManager>,
    /// Storage layer
    pub persistence: Arc<PersistenceLayer>,
    /// Remote generation client, when configured
    pub generation: Option<Arc<dyn GenerationClient>>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Settings, persistence: PersistenceLayer) -> Self {
        let generation: Option<Arc<dyn GenerationClient>> = if config.generation.enabled {
            match GeminiClient::from_config(&config.generation) {
                Some(client) => {
                    tracing::info!(model = client.model(), "Generation fallback enabled");
                    Some(Arc::new(client))
                }
                None => {
                    tracing::warn!(
                        "Generation fallback enabled but no API key configured; using local replies"
                    );
                    None
                }
            }
        } else {
            None
        };

        let sessions = Arc::new(SessionManager::with_config(
            config.agent.max_sessions,
            Duration::from_secs(config.agent.session_timeout_seconds),
            Duration::from_secs(300),
        ));

        Self {
            config: Arc::new(config),
            sessions,
            persistence: Arc::new(persistence),
            generation,
        }
    }

    /// Build an engine for a new session
    pub fn new_engine(&self, session_id: &str) -> ChatEngine {
        let config = EngineConfig {
            typing_delay: Duration::from_millis(self.config.agent.typing_delay_ms),
        };

        ChatEngine::new(
            session_id,
            config,
            self.persistence.complaints.clone(),
            self.generation.clone(),
        )
    }
}
