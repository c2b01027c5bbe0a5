//! API error types

use citemark_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// The document text could not be read; nothing was processed
    #[error("{0}")]
    DocumentUnavailable(String),

    /// Engine error
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// No trigger registered under this name
    #[error("no trigger registered as '{0}'")]
    UnknownTrigger(String),

    /// A trigger with this name already exists
    #[error("trigger '{0}' is already registered")]
    DuplicateTrigger(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// The output sink rejected a write
    #[error("output sink error: {0}")]
    Sink(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
