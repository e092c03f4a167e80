//! Client error types.

use rallycal_core::calendar::{ExportError, ShareError};
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The schedule could not be loaded; `message` is the user-facing text.
    #[error("{message} ({detail})")]
    LoadFailed { message: String, detail: String },

    #[error("Event not found: {id}")]
    NotFound { id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error(transparent)]
    Share(#[from] ShareError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
