//! Output formatting functions.

pub mod json;
pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a view as JSON, or through its pretty formatter.
pub fn render<T, F>(value: &T, format: OutputFormat, pretty: F) -> String
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => pretty(value),
    }
}

/// Format a document: compact JSON, or indented in pretty mode.
pub fn format_document<T: Serialize>(value: &T, format: OutputFormat) -> String {
    render(value, format, |value| {
        serde_json::to_string_pretty(value).unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dispatches_on_format() {
        let value = vec![1, 2];
        assert_eq!(render(&value, OutputFormat::Json, |_| "x".into()), "[1,2]");
        assert_eq!(render(&value, OutputFormat::Pretty, |_| "x".into()), "x");
    }

    #[test]
    fn test_format_document() {
        let value = serde_json::json!({"events": []});
        assert_eq!(format_document(&value, OutputFormat::Json), r#"{"events":[]}"#);
        assert_eq!(
            format_document(&value, OutputFormat::Pretty),
            "{\n  \"events\": []\n}"
        );
    }
}
