//! JSON output formatting.

use chrono::NaiveDate;
use rallycal_core::calendar::{DisplayEvent, EventId, MonthGrid};
use serde::Serialize;

/// Format a value as JSON.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// The list view: region-filtered events plus the auto-scroll target.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView<'a> {
    pub region: &'a str,
    pub today: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_to: Option<EventId>,
    pub events: Vec<&'a DisplayEvent>,
}

/// The calendar view: month grid plus that month's events.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView<'a> {
    pub region: &'a str,
    pub grid: MonthGrid,
    pub selected_day: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_event_of_day: Option<EventId>,
    pub events: Vec<&'a DisplayEvent>,
}

/// The header banner and today ticker.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayView<'a> {
    pub today: NaiveDate,
    /// `M월 D일`
    pub date_label: String,
    /// Whole days since the banner's base date.
    pub days_since: i64,
    pub banner: String,
    pub ticker: String,
    pub events: Vec<&'a DisplayEvent>,
}
