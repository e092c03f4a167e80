use thiserror::Error;

/// Errors found when validating a raw event record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("End date must be after or equal to start date")]
    InvalidDateRange,
}

/// Errors that can occur when exporting an event to iCalendar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Local time {0} does not exist in time zone {1}")]
    NonexistentLocalTime(String, String),
}

/// Errors reported by a share capability.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("Share failed: {0}")]
    Failed(String),
}
