use crate::calendar::{
    expand_event, sorted_chronologically, validate_event, DisplayEvent, EventError, ExpandMode,
    ScheduleDocument,
};

use super::{LoadError, Result};

/// How a fetched document is turned into the display list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Fail the whole load on the first invalid record instead of skipping it.
    pub strict: bool,
    pub mode: ExpandMode,
}

/// A record that failed validation and was left out of the display list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEvent {
    /// 1-based position in the source document.
    pub position: u32,
    pub title: String,
    pub error: EventError,
}

/// The display list built from one fetched document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreparedSchedule {
    /// Expanded and chronologically sorted events.
    pub events: Vec<DisplayEvent>,
    pub rejected: Vec<RejectedEvent>,
    /// Number of records in the source document.
    pub source_count: usize,
}

/// Validates, expands and sorts a schedule document.
///
/// Invalid records are rejected explicitly: they are listed in
/// [`PreparedSchedule::rejected`], or fail the load when `strict` is set.
/// An empty title only fails a strict load; otherwise the record is shown
/// as it is. Accepted events keep their document position in their
/// [`EventId`].
///
/// [`EventId`]: crate::calendar::EventId
pub fn prepare_events(
    document: &ScheduleDocument,
    options: &LoadOptions,
) -> Result<PreparedSchedule> {
    let mut events = Vec::new();
    let mut rejected = Vec::new();

    for (event, position) in document.events.iter().zip(1u32..) {
        match validate_event(event) {
            Ok(()) => events.extend(expand_event(position, event, options.mode)),
            Err(error) if options.strict => {
                return Err(LoadError::InvalidEvent { position, error });
            }
            Err(EventError::EmptyTitle) => {
                events.extend(expand_event(position, event, options.mode))
            }
            Err(error) => rejected.push(RejectedEvent {
                position,
                title: event.title.clone(),
                error,
            }),
        }
    }

    Ok(PreparedSchedule {
        events: sorted_chronologically(events),
        rejected,
        source_count: document.events.len(),
    })
}
