//! Schedule loading: the source abstraction, load errors and the
//! validate/expand/sort pipeline applied to every fetched document.

mod error;
mod prepare;
mod traits;

pub use error::{LoadError, LoadErrorKind, Result, LOAD_FAILURE_MESSAGE};
pub use prepare::{prepare_events, LoadOptions, PreparedSchedule, RejectedEvent};
pub use traits::{parse_document, ScheduleSource};
