//! Display formatting for the fixed Korean locale.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Shown while the schedule document is being fetched.
pub const LOADING_MESSAGE: &str = "집회 일정을 불러오는 중...";
/// Shown instead of the list when no event matches the region.
pub const EMPTY_STATE_MESSAGE: &str = "선택한 지역에 해당하는 집회가 없습니다.";
/// Today ticker text when nothing happens today.
pub const NO_EVENTS_TODAY: &str = "없음";
/// Shown when an event has no map link.
pub const NO_MAP_LINK_MESSAGE: &str = "지도 링크가 제공되지 않았습니다.";
/// Prefix of the today ticker line.
pub const TICKER_LABEL: &str = "금일 집회 : ";

/// Day zero of the banner's day counter.
pub const BANNER_BASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 6, 3) {
    Some(date) => date,
    None => panic!("invalid banner base date"),
};

/// Full Korean weekday name.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "일요일",
        Weekday::Mon => "월요일",
        Weekday::Tue => "화요일",
        Weekday::Wed => "수요일",
        Weekday::Thu => "목요일",
        Weekday::Fri => "금요일",
        Weekday::Sat => "토요일",
    }
}

/// `M/D`, as shown in the list and share text.
pub fn format_short_date(dt: &NaiveDateTime) -> String {
    format!("{}/{}", dt.month(), dt.day())
}

/// `HH:MM`.
pub fn format_time(dt: &NaiveDateTime) -> String {
    dt.format("%H:%M").to_string()
}

/// `오전 9시`, `오후 2시 30분`, `오전 12시` for midnight, `오후 12시` for noon.
pub fn format_korean_hour(hour: u32, minute: u32) -> String {
    let (meridiem, hour12) = match hour {
        0 => ("오전", 12),
        1..=11 => ("오전", hour),
        12 => ("오후", 12),
        _ => ("오후", hour - 12),
    };
    if minute == 0 {
        format!("{meridiem} {hour12}시")
    } else {
        format!("{meridiem} {hour12}시 {minute:02}분")
    }
}

/// Weekday and start time, e.g. `목요일 오후 8시`.
pub fn format_full_time(start: &NaiveDateTime) -> String {
    format!(
        "{} {}",
        weekday_name(start.weekday()),
        format_korean_hour(start.hour(), start.minute())
    )
}

/// `HH:MM - HH:MM`.
pub fn format_time_range(start: &NaiveDateTime, end: &NaiveDateTime) -> String {
    format!("{} - {}", format_time(start), format_time(end))
}

/// `M월 D일`, as used in the banner and the detail view.
pub fn format_month_day<D: Datelike>(date: &D) -> String {
    format!("{}월 {}일", date.month(), date.day())
}

/// Whole days from `base` to `today`. Negative before `base`.
pub fn days_since(base: NaiveDate, today: NaiveDate) -> i64 {
    (today - base).num_days()
}

/// Header banner: `6월 12일, 빼앗긴 지 9일째`.
pub fn format_banner(today: NaiveDate) -> String {
    format!(
        "{}, 빼앗긴 지 {}일째",
        format_month_day(&today),
        days_since(BANNER_BASE_DATE, today)
    )
}
