//! Pretty output formatting.

use chrono::Datelike;
use rallycal_core::calendar::format::{
    format_full_time, format_month_day, format_short_date, format_time_range, weekday_name,
    EMPTY_STATE_MESSAGE, NO_MAP_LINK_MESSAGE, TICKER_LABEL,
};
use rallycal_core::calendar::{
    DisplayEvent, EventId, GridCell, MonthGrid, RegionFilter, WEEKDAY_LABELS,
};
use rallycal_core::serde::format_local_datetime;

/// Format one list row. `marker` flags the auto-scroll target.
pub fn format_event_row(event: &DisplayEvent, marker: bool) -> String {
    let mut output = format!(
        "{} [{}] {} ({}) {}  {}\n      {}",
        if marker { ">" } else { " " },
        event.id,
        format_short_date(&event.start_date),
        short_weekday(event),
        format_time_range(&event.start_date, &event.end_date),
        event.title,
        event.region,
    );
    if !event.location.is_empty() {
        output.push_str(&format!(" · {}", event.location));
    }
    output
}

/// Format the event list, or the empty state when nothing matches.
pub fn format_events(
    events: &[&DisplayEvent],
    region: &RegionFilter,
    scroll_to: Option<EventId>,
) -> String {
    if events.is_empty() {
        return EMPTY_STATE_MESSAGE.to_string();
    }
    let mut output = format!("EVENTS ({}) · {}\n", events.len(), region.label());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!(
            "\n{}",
            format_event_row(event, scroll_to == Some(event.id))
        ));
    }
    output
}

/// Format a month grid.
///
/// Selected day in brackets, `*` after days with events, next-month filler
/// in parentheses.
pub fn format_grid(grid: &MonthGrid) -> String {
    let mut output = format!("{}년 {}\n", grid.year, grid.title());
    output.push_str(
        &WEEKDAY_LABELS
            .iter()
            .map(|label| format!(" {label}  "))
            .collect::<String>(),
    );
    for week in grid.weeks() {
        output.push('\n');
        output.push_str(&week.iter().map(format_cell).collect::<String>());
    }
    output
}

fn format_cell(cell: &GridCell) -> String {
    match *cell {
        GridCell::Blank => "     ".to_string(),
        GridCell::Day {
            day,
            has_event,
            is_selected,
        } => {
            let (open, close) = if is_selected { ('[', ']') } else { (' ', ' ') };
            let mark = if has_event { '*' } else { ' ' };
            format!("{open}{day:>2}{close}{mark}")
        }
        GridCell::NextMonth { day } => format!("({day:>2}) "),
    }
}

/// Format the detail view of an event.
pub fn format_event(event: &DisplayEvent) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  지역: {}\n  날짜: {} ({})\n  시간: {} ({})",
        event.title,
        event.id,
        event.region,
        format_month_day(&event.start_date),
        weekday_name(event.start_date.weekday()),
        format_full_time(&event.start_date),
        format_time_range(&event.start_date, &event.end_date),
    );
    if event.is_multi_day {
        output.push_str(&format!(
            "\n  전체 일정: {} ~ {}",
            format_local_datetime(&event.original_start_date),
            format_local_datetime(&event.original_end_date),
        ));
    }
    if !event.location.is_empty() {
        output.push_str(&format!("\n  장소: {}", event.location));
    }
    if !event.description.is_empty() {
        output.push_str(&format!("\n\n{}\n", event.description));
    }
    if !event.poster_image.is_empty() {
        output.push_str(&format!("\n  포스터: {}", event.poster_image));
    }
    match &event.map_url {
        Some(url) => output.push_str(&format!("\n  지도: {}", url)),
        None => output.push_str(&format!("\n  {}", NO_MAP_LINK_MESSAGE)),
    }
    output
}

/// Format the banner line followed by the today ticker.
pub fn format_today(banner: &str, ticker: &str) -> String {
    format!("{}\n{}{}", banner, TICKER_LABEL, ticker)
}

/// Format the region options, marking the active one.
pub fn format_regions(options: &[RegionFilter], active: &RegionFilter) -> String {
    options
        .iter()
        .map(|option| {
            let marker = if option == active { "*" } else { " " };
            format!("{} {}", marker, option.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn short_weekday(event: &DisplayEvent) -> &'static str {
    WEEKDAY_LABELS[event.start_date.weekday().num_days_from_sunday() as usize]
}
