//! rallycal_core - pure logic for the rallycal assembly calendar.
//!
//! Everything in this crate is free of I/O: schedule sources are abstracted
//! behind [`source::ScheduleSource`] and implemented by the client crate.

pub mod calendar;
pub mod serde;
pub mod source;
pub mod view;
