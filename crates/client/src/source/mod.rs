//! Schedule source implementations.

pub mod file;
pub mod http;

pub use file::FileSource;
pub use http::HttpSource;

use rallycal_core::source::ScheduleSource;

/// Picks the source for a `--source` location: `http://` and `https://`
/// URLs are fetched, anything else is read as a file path.
pub fn source_for(location: &str) -> Box<dyn ScheduleSource> {
    let lower = location.trim_start().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Box::new(HttpSource::new(location.trim()))
    } else {
        Box::new(FileSource::new(location))
    }
}
