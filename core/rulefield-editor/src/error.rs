//! Error types for the command bridge.
//!
//! Editor operations themselves are total; these errors only describe
//! commands that could not be understood.

use thiserror::Error;

/// Result type for editor commands.
pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid arguments for '{command}': {source}")]
    InvalidArguments {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Model(#[from] rulefield_model::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EditorError {
    /// Stable numeric code reported to hosts alongside the message.
    pub fn code(&self) -> u32 {
        match self {
            EditorError::UnknownCommand(_) => 1,
            EditorError::InvalidArguments { .. } => 2,
            EditorError::Model(_) => 3,
            EditorError::Serialization(_) => 4,
        }
    }
}
