//! Sample data generation for testing and demos.
//!
//! These functions have no side effects and are deterministic: the same
//! center date and count always produce the same document.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::types::{RawEvent, ScheduleDocument, REGIONS};

const TITLES: [&str; 6] = [
    "주말 도심 집회",
    "촛불 문화제",
    "시민 행진",
    "거리 연설회",
    "평화 기도회",
    "청년 토크 콘서트",
];

const LOCATIONS: [&str; 7] = [
    "광화문 광장",
    "수원역 광장",
    "춘천 명동",
    "대전역 서광장",
    "광주 5·18 민주광장",
    "부산 서면",
    "제주시청 앞",
];

const START_HOURS: [u32; 4] = [10, 14, 18, 20];

fn at(date: NaiveDate, hour: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(hour))
}

/// Generate sample raw events spread around a center date.
///
/// Every fourth event runs overnight into the next day and every ninth is a
/// three-day sit-in, so the output always exercises the multi-day expander
/// once `count` reaches 4.
///
/// # Example
///
/// ```
/// use rallycal_core::calendar::generate_sample_events;
/// use chrono::NaiveDate;
///
/// let center = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let events = generate_sample_events(center, 12);
///
/// assert_eq!(events.len(), 12);
/// ```
pub fn generate_sample_events(center: NaiveDate, count: u32) -> Vec<RawEvent> {
    (0..count)
        .map(|i| {
            let index = i as usize;
            let region_index = index % REGIONS.len();
            let day = center + Duration::days(i64::from(i) * 2 - i64::from(count));
            let hour = START_HOURS[index % START_HOURS.len()];

            let (start, end) = if i % 9 == 8 {
                (at(day, 18), at(day + Duration::days(2), 12))
            } else if i % 4 == 3 {
                (at(day, 20), at(day + Duration::days(1), 6))
            } else {
                (at(day, hour), at(day, hour + 3))
            };

            let event = RawEvent::new(
                format!("{} {}", REGIONS[region_index], TITLES[index % TITLES.len()]),
                REGIONS[region_index],
                start,
                end,
            )
            .with_location(LOCATIONS[region_index])
            .with_description(format!(
                "{} 지역 시민 여러분의 많은 참여 바랍니다.",
                REGIONS[region_index]
            ))
            .with_poster_image(format!("./posters/{}.jpg", i + 1));

            if i % 2 == 0 {
                event.with_map_url(format!("https://map.example.org/place/{}", i + 1))
            } else {
                event
            }
        })
        .collect()
}

/// Wraps [`generate_sample_events`] in a schedule document.
pub fn sample_document(center: NaiveDate, count: u32) -> ScheduleDocument {
    ScheduleDocument::new(generate_sample_events(center, count))
}
