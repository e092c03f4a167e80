//! View state for the calendar screen.

mod state;

pub use state::{LoadState, MonthStep, ScrollTarget, ViewState};
