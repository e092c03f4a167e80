use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::types::{DisplayEvent, EventId, ExpandMode, RawEvent};

/// Minutes from midnight to 23:59, the last displayable minute of a day.
const DAY_END_MINUTES: i64 = 23 * 60 + 59;

fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    start_of_day(day) + Duration::minutes(DAY_END_MINUTES)
}

/// Title shown for the piece at `day_index` of a multi-day event.
pub fn day_title(title: &str, day_index: u32) -> String {
    if day_index == 0 {
        title.to_string()
    } else {
        format!("{} ({}일차)", title, day_index + 1)
    }
}

/// A display event covering `start..=end` with the source event's title.
fn piece(
    event: &RawEvent,
    id: EventId,
    start_date: NaiveDateTime,
    end_date: NaiveDateTime,
) -> DisplayEvent {
    DisplayEvent {
        id,
        title: event.title.clone(),
        region: event.region.clone(),
        start_date,
        end_date,
        location: event.location.clone(),
        description: event.description.clone(),
        poster_image: event.poster_image.clone(),
        map_url: event.map_url.clone(),
        is_multi_day: false,
        is_first_day: true,
        is_last_day: true,
        day_index: id.day,
        original_start_date: event.start_date,
        original_end_date: event.end_date,
    }
}

/// Expands a single raw event found at 1-based `position` in its document.
///
/// Same-day events (and every event in [`ExpandMode::Whole`]) produce exactly
/// one display event carrying the original interval. Otherwise one display
/// event is produced per calendar day from the start date to the end date
/// inclusive: the first day runs from the original start to 23:59, interior
/// days run 00:00 to 23:59 and the last day runs 00:00 to the original end.
///
/// An end before the start yields no pieces at all.
pub fn expand_event(position: u32, event: &RawEvent, mode: ExpandMode) -> Vec<DisplayEvent> {
    if event.end_date < event.start_date {
        return Vec::new();
    }

    if !event.spans_multiple_days() || mode == ExpandMode::Whole {
        return vec![DisplayEvent {
            is_multi_day: event.spans_multiple_days(),
            ..piece(
                event,
                EventId::new(position, 0),
                event.start_date,
                event.end_date,
            )
        }];
    }

    let last_day = event.end_date.date();

    event
        .start_date
        .date()
        .iter_days()
        .take_while(|day| *day <= last_day)
        .zip(0u32..)
        .map(|(day, day_index)| {
            let is_first_day = day_index == 0;
            let is_last_day = day == last_day;

            let start = if is_first_day {
                event.start_date
            } else {
                start_of_day(day)
            };
            let end = if is_last_day {
                event.end_date
            } else {
                end_of_day(day)
            };

            DisplayEvent {
                title: day_title(&event.title, day_index),
                is_multi_day: true,
                is_first_day,
                is_last_day,
                ..piece(event, EventId::new(position, day_index), start, end)
            }
        })
        .collect()
}

/// Expands every event of a document, in document order.
///
/// Positions are assigned from the slice order, starting at 1.
pub fn expand_events(events: &[RawEvent], mode: ExpandMode) -> Vec<DisplayEvent> {
    events
        .iter()
        .zip(1u32..)
        .flat_map(|(event, position)| expand_event(position, event, mode))
        .collect()
}

/// Splits multi-day events into one display event per day they span.
pub fn expand_multi_day_events(events: &[RawEvent]) -> Vec<DisplayEvent> {
    expand_events(events, ExpandMode::PerDay)
}
