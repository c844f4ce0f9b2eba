//! Error types

use thiserror::Error;

/// Errors surfaced by the frame orchestrator
#[derive(Debug, Error)]
pub enum GameError {
    /// The host handed over no key state on an active frame
    #[error("input state missing on an active frame")]
    MissingInput,
}

/// Errors loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed settings file
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
