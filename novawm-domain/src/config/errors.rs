use std::path::PathBuf;

use novawm_core::error::{ConfigError, CoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WmConfigError {
    #[error("Failed to load window manager configuration from {path:?}: {source}")]
    LoadError {
        path: PathBuf,
        #[source]
        source: CoreError,
    },

    #[error("Failed to deserialize window manager configuration: {message}{}", snippet.as_ref().map(|s| format!(" (snippet: {:.50})", s)).unwrap_or_default())]
    DeserializationError {
        message: String,
        snippet: Option<String>,
        #[source]
        source: Option<toml::de::Error>,
    },

    #[error("Invalid window manager configuration: {reason}")]
    InvalidData { reason: String },

    #[error("Could not locate the configuration directory: {0}")]
    Location(#[from] ConfigError),
}

impl WmConfigError {
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        WmConfigError::InvalidData { reason: reason.into() }
    }
}
