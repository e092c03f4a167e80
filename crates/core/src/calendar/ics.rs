//! Minimal iCalendar (RFC 5545) export of a single display event.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use uuid::Uuid;

use super::error::ExportError;
use super::types::DisplayEvent;
use crate::serde::format_local_datetime;

/// Maximum octets per content line before folding.
const MAX_LINE_OCTETS: usize = 75;

/// Everything an export needs besides the event itself.
#[derive(Debug, Clone, PartialEq)]
pub struct IcsContext {
    /// Zone the document's wall-clock timestamps are interpreted in.
    pub tz: Tz,
    /// Creation timestamp written as `DTSTAMP`.
    pub dtstamp: DateTime<Utc>,
    pub uid: String,
    pub prodid: String,
}

impl IcsContext {
    /// Creates a context stamped now with a random UID under `uid_domain`.
    pub fn new(tz: Tz, app_name: &str, uid_domain: &str) -> Self {
        Self {
            tz,
            dtstamp: Utc::now(),
            uid: format!("{}@{}", Uuid::new_v4(), uid_domain),
            prodid: format!("-//{}//ScheduleEvent//KO", app_name),
        }
    }

    /// Sets a fixed UID (useful for testing).
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    /// Sets a fixed creation timestamp (useful for testing).
    pub fn with_dtstamp(mut self, dtstamp: DateTime<Utc>) -> Self {
        self.dtstamp = dtstamp;
        self
    }
}

/// Interprets a wall-clock timestamp in `tz` and converts it to UTC.
///
/// Ambiguous times (DST fold) resolve to the earlier instant; times inside a
/// DST gap do not exist and are rejected.
pub fn to_utc(local: &NaiveDateTime, tz: &Tz) -> Result<DateTime<Utc>, ExportError> {
    tz.from_local_datetime(local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            ExportError::NonexistentLocalTime(format_local_datetime(local), tz.name().to_string())
        })
}

/// `YYYYMMDDTHHMM00Z`: whole minutes, seconds forced to zero.
pub fn format_ics_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M00Z").to_string()
}

/// Escapes a TEXT property value.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Folds a content line so no physical line exceeds 75 octets.
///
/// Never splits a UTF-8 sequence.
pub fn fold_line(line: &str) -> String {
    let mut folded = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut width = 0;
    for ch in line.chars() {
        let len = ch.len_utf8();
        if width + len > MAX_LINE_OCTETS {
            folded.push_str("\r\n ");
            width = 1;
        }
        folded.push(ch);
        width += len;
    }
    folded
}

/// Serializes one event as a VCALENDAR document with CRLF line endings.
pub fn to_ics(event: &DisplayEvent, ctx: &IcsContext) -> Result<String, ExportError> {
    let start = to_utc(&event.start_date, &ctx.tz)?;
    let end = to_utc(&event.end_date, &ctx.tz)?;

    let lines = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", ctx.prodid),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", ctx.uid),
        format!("DTSTAMP:{}", format_ics_timestamp(&ctx.dtstamp)),
        format!("DTSTART:{}", format_ics_timestamp(&start)),
        format!("DTEND:{}", format_ics_timestamp(&end)),
        format!("SUMMARY:{}", escape_text(&event.title)),
        format!("LOCATION:{}", escape_text(&event.location)),
        format!("DESCRIPTION:{}", escape_text(&event.description)),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    let mut document = String::new();
    for line in &lines {
        document.push_str(&fold_line(line));
        document.push_str("\r\n");
    }
    Ok(document)
}

/// Suggested download name: `<title>.ics`, with path separators replaced.
pub fn ics_file_name(event: &DisplayEvent) -> String {
    let stem: String = event
        .title
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{stem}.ics")
}
