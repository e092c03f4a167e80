//! rallycal_client - CLI for the rallycal assembly calendar.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod share;
pub mod source;

pub use config::Config;
pub use error::{ClientError, Result};
