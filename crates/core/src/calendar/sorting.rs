use super::types::DisplayEvent;

/// Sorts display events by their start timestamp.
///
/// The sort is stable: events starting at the same minute keep the order the
/// expander produced them in, which is document order.
pub fn sort_chronologically(events: &mut [DisplayEvent]) {
    events.sort_by_key(|event| event.start_date);
}

/// Returns the events sorted by start timestamp.
pub fn sorted_chronologically(mut events: Vec<DisplayEvent>) -> Vec<DisplayEvent> {
    sort_chronologically(&mut events);
    events
}
