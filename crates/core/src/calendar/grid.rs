use std::collections::BTreeSet;

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

/// Weekday header of the month grid, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Returns the first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GridCell {
    /// Padding before the 1st.
    Blank,
    #[serde(rename_all = "camelCase")]
    Day {
        day: u32,
        has_event: bool,
        is_selected: bool,
    },
    /// Filler showing the first days of the following month.
    NextMonth { day: u32 },
}

impl GridCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            GridCell::Day { day, .. } => Some(*day),
            _ => None,
        }
    }
}

/// A Sunday-first calendar grid for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }

    /// Grid title, e.g. `6월`.
    pub fn title(&self) -> String {
        format!("{}월", self.month)
    }
}

/// Builds the grid for the month containing `date`.
///
/// Leading blanks pad the first week up to the weekday of the 1st, and
/// next-month cells fill the last week.
pub fn build_month_grid(
    date: NaiveDate,
    event_days: &BTreeSet<u32>,
    selected_day: Option<u32>,
) -> MonthGrid {
    let first = first_of_month(date);
    let leading = first.weekday().num_days_from_sunday() as usize;
    let day_count = days_in_month(first);

    let mut cells = Vec::with_capacity(42);
    cells.extend(std::iter::repeat_n(GridCell::Blank, leading));
    cells.extend((1..=day_count).map(|day| GridCell::Day {
        day,
        has_event: event_days.contains(&day),
        is_selected: selected_day == Some(day),
    }));

    let trailing = (7 - cells.len() % 7) % 7;
    cells.extend((1..=trailing as u32).map(|day| GridCell::NextMonth { day }));

    MonthGrid {
        year: first.year(),
        month: first.month(),
        cells,
    }
}
