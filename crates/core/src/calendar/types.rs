use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Label of the "every region" sentinel shown first in the region dropdown.
pub const ALL_REGIONS_LABEL: &str = "전체";

/// Known regions, in dropdown order (after the sentinel).
pub const REGIONS: [&str; 7] = ["서울", "경기", "강원", "충청", "전라", "경상", "제주"];

/// An assembly event as stored in the source document.
///
/// The interval is inclusive and may span several calendar days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub title: String,
    pub region: String,
    #[serde(with = "crate::serde::local_datetime")]
    pub start_date: NaiveDateTime,
    #[serde(with = "crate::serde::local_datetime")]
    pub end_date: NaiveDateTime,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub poster_image: String,
    #[serde(
        default,
        deserialize_with = "crate::serde::deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub map_url: Option<String>,
}

impl RawEvent {
    /// Creates a new event with empty location, description and poster.
    pub fn new(
        title: impl Into<String>,
        region: impl Into<String>,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            region: region.into(),
            start_date,
            end_date,
            location: String::new(),
            description: String::new(),
            poster_image: String::new(),
            map_url: None,
        }
    }

    /// Sets the location for this event.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the poster image URL for this event.
    pub fn with_poster_image(mut self, poster_image: impl Into<String>) -> Self {
        self.poster_image = poster_image.into();
        self
    }

    /// Sets the map link for this event.
    pub fn with_map_url(mut self, map_url: impl Into<String>) -> Self {
        self.map_url = Some(map_url.into());
        self
    }

    /// Returns true if the start and end fall on different calendar days.
    pub fn spans_multiple_days(&self) -> bool {
        self.start_date.date() != self.end_date.date()
    }
}

/// The fetched schedule document: `{ "events": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub events: Vec<RawEvent>,
}

impl ScheduleDocument {
    pub fn new(events: Vec<RawEvent>) -> Self {
        Self { events }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Identifier of a display event: the 1-based position of its source event
/// plus the day index within that event's span.
///
/// Rendered as `"<source>-<day>"`, which doubles as the list-row key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventId {
    pub source: u32,
    pub day: u32,
}

impl EventId {
    pub fn new(source: u32, day: u32) -> Self {
        Self { source, day }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.day)
    }
}

impl FromStr for EventId {
    type Err = String;

    /// Accepts `"<source>-<day>"`, or a bare `"<source>"` meaning day 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (source, day) = match s.split_once('-') {
            Some((source, day)) => (source, day),
            None => (s, "0"),
        };
        let source = source
            .parse::<u32>()
            .map_err(|_| format!("invalid event id: {s}"))?;
        let day = day
            .parse::<u32>()
            .map_err(|_| format!("invalid event id: {s}"))?;
        if source == 0 {
            return Err(format!("invalid event id: {s} (positions start at 1)"));
        }
        Ok(Self { source, day })
    }
}

impl TryFrom<String> for EventId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EventId> for String {
    fn from(id: EventId) -> Self {
        id.to_string()
    }
}

/// A per-calendar-day view of a [`RawEvent`], used for list and calendar
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEvent {
    pub id: EventId,
    /// Source title, suffixed with `(<n>일차)` on non-first days.
    pub title: String,
    pub region: String,
    /// Day-bounded start of this piece.
    #[serde(with = "crate::serde::local_datetime")]
    pub start_date: NaiveDateTime,
    /// Day-bounded end of this piece.
    #[serde(with = "crate::serde::local_datetime")]
    pub end_date: NaiveDateTime,
    pub location: String,
    pub description: String,
    pub poster_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    pub is_multi_day: bool,
    pub is_first_day: bool,
    pub is_last_day: bool,
    pub day_index: u32,
    #[serde(with = "crate::serde::local_datetime")]
    pub original_start_date: NaiveDateTime,
    #[serde(with = "crate::serde::local_datetime")]
    pub original_end_date: NaiveDateTime,
}

impl DisplayEvent {
    /// The calendar day this piece is displayed on.
    pub fn date(&self) -> NaiveDate {
        self.start_date.date()
    }
}

/// Region selection for the list and calendar views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum RegionFilter {
    /// The "전체" sentinel: no filtering.
    #[default]
    All,
    Region(String),
}

impl RegionFilter {
    pub fn region(name: impl Into<String>) -> Self {
        RegionFilter::Region(name.into())
    }

    /// Returns true if an event tagged with `region` passes this filter.
    pub fn matches(&self, region: &str) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Region(name) => name == region,
        }
    }

    /// Dropdown label.
    pub fn label(&self) -> &str {
        match self {
            RegionFilter::All => ALL_REGIONS_LABEL,
            RegionFilter::Region(name) => name,
        }
    }

    /// All dropdown options, sentinel first.
    pub fn options() -> Vec<RegionFilter> {
        std::iter::once(RegionFilter::All)
            .chain(REGIONS.iter().map(|r| RegionFilter::region(*r)))
            .collect()
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RegionFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == ALL_REGIONS_LABEL || s.eq_ignore_ascii_case("all") {
            Ok(RegionFilter::All)
        } else {
            Ok(RegionFilter::Region(s.to_string()))
        }
    }
}

/// How raw events are turned into display events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpandMode {
    /// One display event per calendar day spanned.
    #[default]
    PerDay,
    /// One display event per raw event, keeping the original interval.
    Whole,
}
