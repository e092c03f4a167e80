use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use super::error::EventError;
use super::types::{DisplayEvent, EventId, RawEvent, RegionFilter};

/// Validates a raw event record.
///
/// The date range is checked first, so a record with both problems reports
/// [`EventError::InvalidDateRange`].
pub fn validate_event(event: &RawEvent) -> Result<(), EventError> {
    if event.end_date < event.start_date {
        return Err(EventError::InvalidDateRange);
    }
    if event.title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    Ok(())
}

/// Returns true if `date` falls in the given year and month.
pub fn is_in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    date.year() == year && date.month() == month
}

/// Filters events by region. [`RegionFilter::All`] keeps every event.
pub fn filter_by_region<'a>(
    events: &'a [DisplayEvent],
    region: &RegionFilter,
) -> Vec<&'a DisplayEvent> {
    events
        .iter()
        .filter(|event| region.matches(&event.region))
        .collect()
}

/// Filters events displayed in the given year and month.
pub fn filter_by_month<'a, I>(events: I, year: i32, month: u32) -> Vec<&'a DisplayEvent>
where
    I: IntoIterator<Item = &'a DisplayEvent>,
{
    events
        .into_iter()
        .filter(|event| is_in_month(event.date(), year, month))
        .collect()
}

/// Days of the month (1-based) that have at least one matching event.
pub fn event_days_in_month(
    events: &[DisplayEvent],
    region: &RegionFilter,
    year: i32,
    month: u32,
) -> BTreeSet<u32> {
    filter_by_month(filter_by_region(events, region), year, month)
        .into_iter()
        .map(|event| event.date().day())
        .collect()
}

/// The first matching event displayed on `date`, in list order.
pub fn first_event_on_day<'a>(
    events: &'a [DisplayEvent],
    region: &RegionFilter,
    date: NaiveDate,
) -> Option<&'a DisplayEvent> {
    events
        .iter()
        .find(|event| region.matches(&event.region) && event.date() == date)
}

/// All events displayed on `date`, regardless of region.
pub fn events_on_date(events: &[DisplayEvent], date: NaiveDate) -> Vec<&DisplayEvent> {
    events.iter().filter(|event| event.date() == date).collect()
}

/// The first event whose day is `today` or later.
///
/// Expects events in chronological order. `None` when every event is in the
/// past.
pub fn first_upcoming_event<'a, I>(events: I, today: NaiveDate) -> Option<&'a DisplayEvent>
where
    I: IntoIterator<Item = &'a DisplayEvent>,
{
    events.into_iter().find(|event| event.date() >= today)
}

/// Looks an event up by its identifier.
pub fn find_event(events: &[DisplayEvent], id: EventId) -> Option<&DisplayEvent> {
    events.iter().find(|event| event.id == id)
}

/// Region and month index over a chronologically sorted event list.
///
/// Drives calendar highlighting (which days have events) and the
/// day-click-to-list synchronisation (first event of a day).
#[derive(Debug, Clone)]
pub struct DayIndex<'a> {
    year: i32,
    month: u32,
    /// Region-filtered events across all months.
    pub events: Vec<&'a DisplayEvent>,
    /// Region-filtered events of the target month.
    pub month_events: Vec<&'a DisplayEvent>,
    /// Days of the target month with at least one event.
    pub event_days: BTreeSet<u32>,
}

impl<'a> DayIndex<'a> {
    pub fn build(events: &'a [DisplayEvent], region: &RegionFilter, year: i32, month: u32) -> Self {
        let events = filter_by_region(events, region);
        let month_events = filter_by_month(events.iter().copied(), year, month);
        let event_days = month_events.iter().map(|event| event.date().day()).collect();

        Self {
            year,
            month,
            events,
            month_events,
            event_days,
        }
    }

    /// Returns true if `day` of the target month has an event.
    pub fn has_event(&self, day: u32) -> bool {
        self.event_days.contains(&day)
    }

    /// The first event of `day` in the target month.
    pub fn first_event_on(&self, day: u32) -> Option<&'a DisplayEvent> {
        self.month_events
            .iter()
            .copied()
            .find(|event| event.date().day() == day)
    }

    /// Returns true if no event matches the region at all.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}
