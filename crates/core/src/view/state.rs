//! The calendar view's state container.
//!
//! All UI state lives in one [`ViewState`] and changes only through its
//! transition methods. Derived views (grid, filtered list, ticker) are
//! computed on demand and never stored.

use std::collections::BTreeSet;

use chrono::{Datelike, Months, NaiveDate};

use crate::calendar::{
    build_month_grid, days_in_month, events_on_date, find_event, first_of_month,
    first_upcoming_event, format, DayIndex, DisplayEvent, EventId, MonthGrid, RegionFilter,
};
use crate::source::LoadError;

/// Progress of the one-shot schedule load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Terminal: the only way out is a manual reload.
    Failed {
        /// User-facing message.
        message: String,
        /// Underlying cause, for logs and diagnostics.
        detail: String,
    },
}

/// Direction of a month change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Previous,
    Next,
}

/// Instruction for the list view to bring an event into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTarget {
    pub event_id: EventId,
    pub date: NaiveDate,
}

impl ScrollTarget {
    fn of(event: &DisplayEvent) -> Self {
        Self {
            event_id: event.id,
            date: event.date(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    today: NaiveDate,
    /// Always the first day of the displayed month.
    current_month: NaiveDate,
    selected_day: u32,
    selected_event: Option<EventId>,
    region: RegionFilter,
    region_dropdown_open: bool,
    load: LoadState,
    events: Vec<DisplayEvent>,
}

impl ViewState {
    /// Initial state: today's month and day selected, load pending.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            current_month: first_of_month(today),
            selected_day: today.day(),
            selected_event: None,
            region: RegionFilter::All,
            region_dropdown_open: false,
            load: LoadState::Loading,
            events: Vec::new(),
        }
    }

    /// Applies the outcome of the load.
    ///
    /// On success stores the (already sorted) events and returns the first
    /// region-matching event on or after today, which the list should scroll
    /// to. On failure the state becomes [`LoadState::Failed`] with an empty
    /// list.
    pub fn finish_loading(
        &mut self,
        result: Result<Vec<DisplayEvent>, LoadError>,
    ) -> Option<ScrollTarget> {
        match result {
            Ok(events) => {
                self.events = events;
                self.load = LoadState::Ready;
                first_upcoming_event(self.visible_events(), self.today).map(ScrollTarget::of)
            }
            Err(err) => {
                self.events = Vec::new();
                self.load = LoadState::Failed {
                    message: err.user_message().to_string(),
                    detail: err.to_string(),
                };
                None
            }
        }
    }

    /// Moves the calendar one month back or forward.
    pub fn change_month(&mut self, step: MonthStep) {
        let moved = match step {
            MonthStep::Previous => self.current_month.checked_sub_months(Months::new(1)),
            MonthStep::Next => self.current_month.checked_add_months(Months::new(1)),
        };
        if let Some(month) = moved {
            self.current_month = month;
        }
    }

    /// Jumps the calendar to the month containing `date`.
    pub fn show_month(&mut self, date: NaiveDate) {
        self.current_month = first_of_month(date);
    }

    /// Selects a day of the displayed month.
    ///
    /// Returns the first region-matching event of that day, if any, for the
    /// list to scroll to. Days outside the month are ignored.
    pub fn select_day(&mut self, day: u32) -> Option<ScrollTarget> {
        if day == 0 || day > days_in_month(self.current_month) {
            return None;
        }
        self.selected_day = day;
        self.day_index().first_event_on(day).map(ScrollTarget::of)
    }

    /// Opens the detail view for an event, moving the calendar to its day.
    ///
    /// Returns false (and changes nothing) for an unknown id.
    pub fn select_event(&mut self, id: EventId) -> bool {
        let Some(date) = find_event(&self.events, id).map(DisplayEvent::date) else {
            return false;
        };
        self.focus_date(date);
        self.selected_event = Some(id);
        true
    }

    /// Closes the detail view.
    pub fn dismiss_modal(&mut self) {
        self.selected_event = None;
    }

    pub fn toggle_region_dropdown(&mut self) {
        self.region_dropdown_open = !self.region_dropdown_open;
    }

    pub fn close_region_dropdown(&mut self) {
        self.region_dropdown_open = false;
    }

    /// Applies a region filter and closes the dropdown.
    pub fn choose_region(&mut self, region: RegionFilter) {
        self.region = region;
        self.region_dropdown_open = false;
    }

    /// Best-effort sync from the list's scroll position: the event now at the
    /// top of the list becomes the selected day. Event data is untouched.
    pub fn sync_visible_event(&mut self, id: EventId) {
        if let Some(date) = find_event(&self.events, id).map(DisplayEvent::date) {
            self.focus_date(date);
        }
    }

    fn focus_date(&mut self, date: NaiveDate) {
        if first_of_month(date) != self.current_month {
            self.current_month = first_of_month(date);
        }
        self.selected_day = date.day();
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// First day of the displayed month.
    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    pub fn selected_day(&self) -> u32 {
        self.selected_day
    }

    pub fn region(&self) -> &RegionFilter {
        &self.region
    }

    pub fn is_region_dropdown_open(&self) -> bool {
        self.region_dropdown_open
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Every loaded event, unfiltered.
    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// Region and month index of the current view.
    pub fn day_index(&self) -> DayIndex<'_> {
        DayIndex::build(
            &self.events,
            &self.region,
            self.current_month.year(),
            self.current_month.month(),
        )
    }

    /// The list: region-filtered events across all months.
    pub fn visible_events(&self) -> Vec<&DisplayEvent> {
        self.day_index().events
    }

    /// Region-filtered events of the displayed month.
    pub fn month_events(&self) -> Vec<&DisplayEvent> {
        self.day_index().month_events
    }

    /// Days of the displayed month with at least one region-matching event.
    pub fn event_days(&self) -> BTreeSet<u32> {
        self.day_index().event_days
    }

    /// Returns true if no loaded event matches the region filter.
    pub fn is_empty(&self) -> bool {
        self.day_index().is_empty()
    }

    /// The month grid with event days and the selected day marked.
    pub fn grid(&self) -> MonthGrid {
        build_month_grid(
            self.current_month,
            &self.day_index().event_days,
            Some(self.selected_day),
        )
    }

    /// The event shown in the detail view, if one is open.
    pub fn selected_event(&self) -> Option<&DisplayEvent> {
        self.selected_event
            .and_then(|id| find_event(&self.events, id))
    }

    /// Message replacing the list when nothing matches the region.
    pub fn empty_state_message(&self) -> Option<&'static str> {
        match self.load {
            LoadState::Ready if self.is_empty() => Some(format::EMPTY_STATE_MESSAGE),
            _ => None,
        }
    }

    /// Titles of today's events joined with ` • `, or `없음`.
    pub fn today_ticker(&self) -> String {
        let today = events_on_date(&self.events, self.today);
        if today.is_empty() {
            return format::NO_EVENTS_TODAY.to_string();
        }
        today
            .iter()
            .map(|event| event.title.as_str())
            .collect::<Vec<_>>()
            .join(" • ")
    }

    /// Whole days from [`format::BANNER_BASE_DATE`] to today.
    pub fn days_since_base(&self) -> i64 {
        format::days_since(format::BANNER_BASE_DATE, self.today)
    }

    /// Header line with today's date and the day counter.
    pub fn banner(&self) -> String {
        format::format_banner(self.today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{expand_multi_day_events, sorted_chronologically, GridCell, RawEvent};
    use chrono::NaiveDateTime;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn events() -> Vec<DisplayEvent> {
        sorted_chronologically(expand_multi_day_events(&[
            RawEvent::new("서울 집회", "서울", at(2025, 6, 14, 14, 0), at(2025, 6, 14, 17, 0)),
            RawEvent::new("부산 집회", "경상", at(2025, 6, 14, 10, 0), at(2025, 6, 14, 12, 0)),
            RawEvent::new("경기 밤샘", "경기", at(2025, 6, 30, 20, 0), at(2025, 7, 1, 6, 0)),
            RawEvent::new("제주 집회", "제주", at(2025, 7, 5, 15, 0), at(2025, 7, 5, 16, 0)),
        ]))
    }

    fn loaded(today: NaiveDate) -> (ViewState, Option<ScrollTarget>) {
        let mut state = ViewState::new(today);
        let target = state.finish_loading(Ok(events()));
        (state, target)
    }

    #[test]
    fn test_new_state() {
        let state = ViewState::new(date(2025, 6, 18));

        assert_eq!(state.current_month(), date(2025, 6, 1));
        assert_eq!(state.selected_day(), 18);
        assert_eq!(state.load_state(), &LoadState::Loading);
        assert_eq!(state.region(), &RegionFilter::All);
        assert!(state.events().is_empty());
        assert_eq!(state.empty_state_message(), None);
    }

    #[test]
    fn test_finish_loading_scrolls_to_first_upcoming() {
        let (state, target) = loaded(date(2025, 6, 15));

        assert_eq!(state.load_state(), &LoadState::Ready);
        assert_eq!(
            target,
            Some(ScrollTarget {
                event_id: EventId::new(3, 0),
                date: date(2025, 6, 30)
            })
        );
    }

    #[test]
    fn test_finish_loading_scroll_respects_region() {
        let mut state = ViewState::new(date(2025, 6, 1));
        state.choose_region(RegionFilter::region("제주"));

        let target = state.finish_loading(Ok(events())).unwrap();

        assert_eq!(target.event_id, EventId::new(4, 0));
    }

    #[test]
    fn test_finish_loading_all_in_past_no_scroll() {
        let (state, target) = loaded(date(2025, 8, 1));
        assert_eq!(target, None);
        assert_eq!(state.events().len(), 5);
    }

    #[test]
    fn test_finish_loading_failure() {
        let mut state = ViewState::new(date(2025, 6, 15));
        let target = state.finish_loading(Err(LoadError::Status { status: 404 }));

        assert_eq!(target, None);
        assert!(state.events().is_empty());
        match state.load_state() {
            LoadState::Failed { message, detail } => {
                assert_eq!(message, "집회 일정을 불러오는데 실패했습니다.");
                assert_eq!(detail, "Schedule source returned HTTP 404");
            }
            other => panic!("unexpected state: {other:?}"),
        }
    }

    #[test]
    fn test_change_month() {
        let mut state = ViewState::new(date(2025, 1, 31));

        state.change_month(MonthStep::Previous);
        assert_eq!(state.current_month(), date(2024, 12, 1));

        state.change_month(MonthStep::Next);
        state.change_month(MonthStep::Next);
        assert_eq!(state.current_month(), date(2025, 2, 1));
    }

    #[test]
    fn test_select_day_returns_first_event_of_day() {
        let (mut state, _) = loaded(date(2025, 6, 1));

        let target = state.select_day(14).unwrap();
        assert_eq!(state.selected_day(), 14);
        assert_eq!(target.event_id, EventId::new(2, 0));

        assert_eq!(state.select_day(15), None);
        assert_eq!(state.selected_day(), 15);
    }

    #[test]
    fn test_select_day_respects_region() {
        let (mut state, _) = loaded(date(2025, 6, 1));
        state.choose_region(RegionFilter::region("서울"));

        let target = state.select_day(14).unwrap();
        assert_eq!(target.event_id, EventId::new(1, 0));
    }

    #[test]
    fn test_select_day_out_of_range_is_ignored() {
        let (mut state, _) = loaded(date(2025, 6, 10));

        assert_eq!(state.select_day(31), None);
        assert_eq!(state.select_day(0), None);
        assert_eq!(state.selected_day(), 10);
    }

    #[test]
    fn test_select_event_moves_month() {
        let (mut state, _) = loaded(date(2025, 6, 10));

        assert!(state.select_event(EventId::new(4, 0)));
        assert_eq!(state.current_month(), date(2025, 7, 1));
        assert_eq!(state.selected_day(), 5);
        assert_eq!(state.selected_event().unwrap().title, "제주 집회");

        state.dismiss_modal();
        assert!(state.selected_event().is_none());
        assert_eq!(state.current_month(), date(2025, 7, 1));
    }

    #[test]
    fn test_select_unknown_event() {
        let (mut state, _) = loaded(date(2025, 6, 10));

        assert!(!state.select_event(EventId::new(42, 0)));
        assert!(state.selected_event().is_none());
        assert_eq!(state.selected_day(), 10);
    }

    #[test]
    fn test_region_dropdown() {
        let (mut state, _) = loaded(date(2025, 6, 10));

        state.toggle_region_dropdown();
        assert!(state.is_region_dropdown_open());
        state.choose_region(RegionFilter::region("제주"));
        assert!(!state.is_region_dropdown_open());
        assert_eq!(state.visible_events().len(), 1);
        assert!(state.month_events().is_empty());

        state.toggle_region_dropdown();
        state.close_region_dropdown();
        assert!(!state.is_region_dropdown_open());
    }

    #[test]
    fn test_empty_state_message() {
        let (mut state, _) = loaded(date(2025, 6, 10));
        assert_eq!(state.empty_state_message(), None);

        state.choose_region(RegionFilter::region("강원"));
        assert_eq!(
            state.empty_state_message(),
            Some("선택한 지역에 해당하는 집회가 없습니다.")
        );
    }

    #[test]
    fn test_zero_events_empty_for_every_region() {
        let mut state = ViewState::new(date(2025, 6, 10));
        assert_eq!(state.finish_loading(Ok(Vec::new())), None);

        for region in RegionFilter::options() {
            state.choose_region(region);
            assert!(state.visible_events().is_empty());
            assert_eq!(
                state.empty_state_message(),
                Some(format::EMPTY_STATE_MESSAGE)
            );
        }
    }

    #[test]
    fn test_grid_marks_event_days() {
        let (state, _) = loaded(date(2025, 6, 14));
        let grid = state.grid();
        assert_eq!(state.event_days().into_iter().collect::<Vec<_>>(), vec![14, 30]);

        let marked: Vec<u32> = grid
            .cells
            .iter()
            .filter_map(|cell| match cell {
                GridCell::Day {
                    day,
                    has_event: true,
                    ..
                } => Some(*day),
                _ => None,
            })
            .collect();
        assert_eq!(marked, vec![14, 30]);
        assert!(grid.cells.contains(&GridCell::Day {
            day: 14,
            has_event: true,
            is_selected: true
        }));
    }

    #[test]
    fn test_sync_visible_event_only_moves_selection() {
        let (mut state, _) = loaded(date(2025, 6, 10));
        let before = state.events().to_vec();

        state.sync_visible_event(EventId::new(3, 1));

        assert_eq!(state.current_month(), date(2025, 7, 1));
        assert_eq!(state.selected_day(), 1);
        assert!(state.selected_event().is_none());
        assert_eq!(state.events(), before.as_slice());
    }

    #[test]
    fn test_today_ticker() {
        let (state, _) = loaded(date(2025, 6, 14));
        assert_eq!(state.today_ticker(), "부산 집회 • 서울 집회");

        let (state, _) = loaded(date(2025, 6, 15));
        assert_eq!(state.today_ticker(), "없음");
    }

    #[test]
    fn test_banner_counts_from_base_date() {
        let state = ViewState::new(date(2025, 7, 2));
        assert_eq!(state.days_since_base(), 29);
        assert_eq!(state.banner(), "7월 2일, 빼앗긴 지 29일째");

        assert_eq!(ViewState::new(date(2025, 6, 3)).days_since_base(), 0);
        assert_eq!(ViewState::new(date(2025, 6, 2)).days_since_base(), -1);
    }
}
