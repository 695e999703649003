//! Configuration for the HostelNexus assistant
//!
//! Settings are loaded from an optional TOML file plus environment
//! variables prefixed with `HOSTEL_NEXUS__` (double underscore as the
//! section separator).

pub mod settings;

pub use settings::{
    AgentConfig, GenerationConfig, ObservabilityConfig, ServerConfig, Settings, StorageConfig,
};

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
