mod error;
mod expand;
pub mod format;
mod grid;
mod ics;
mod mock_data;
mod operations;
mod share;
mod sorting;
mod types;

pub use error::{EventError, ExportError, ShareError};
pub use expand::{day_title, expand_event, expand_events, expand_multi_day_events};
pub use grid::{
    build_month_grid, days_in_month, first_of_month, GridCell, MonthGrid, WEEKDAY_LABELS,
};
pub use ics::{
    escape_text, fold_line, format_ics_timestamp, ics_file_name, to_ics, to_utc, IcsContext,
};
pub use mock_data::{generate_sample_events, sample_document};
pub use operations::{
    event_days_in_month, events_on_date, filter_by_month, filter_by_region, find_event,
    first_event_on_day, first_upcoming_event, is_in_month, validate_event, DayIndex,
};
pub use share::{
    compose_share, share_event, ShareCapability, ShareOutcome, SharePayload,
    SHARE_UNSUPPORTED_MESSAGE,
};
pub use sorting::{sort_chronologically, sorted_chronologically};
pub use types::{
    DisplayEvent, EventId, ExpandMode, RawEvent, RegionFilter, ScheduleDocument,
    ALL_REGIONS_LABEL, REGIONS,
};
