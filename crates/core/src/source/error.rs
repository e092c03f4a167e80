use thiserror::Error;

use crate::calendar::EventError;

/// The single user-facing message for every load failure.
pub const LOAD_FAILURE_MESSAGE: &str = "집회 일정을 불러오는데 실패했습니다.";

/// Coarse classification of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The document could not be retrieved (network, I/O, non-2xx status).
    LoadFailure,
    /// The document was retrieved but is not a valid schedule.
    ParseFailure,
}

/// Errors that can occur while loading the schedule document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Failed to fetch schedule: {0}")]
    Fetch(String),
    #[error("Schedule source returned HTTP {status}")]
    Status { status: u16 },
    #[error("Failed to parse schedule: {0}")]
    Parse(String),
    #[error("Invalid event at position {position}: {error}")]
    InvalidEvent { position: u32, error: EventError },
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::Fetch(_) | LoadError::Status { .. } => LoadErrorKind::LoadFailure,
            LoadError::Parse(_) | LoadError::InvalidEvent { .. } => LoadErrorKind::ParseFailure,
        }
    }

    /// Message shown to the user, regardless of the cause.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

/// Result type for schedule loading.
pub type Result<T> = std::result::Result<T, LoadError>;
