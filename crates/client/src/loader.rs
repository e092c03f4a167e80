//! One-shot schedule load: fetch, parse, validate, expand and sort.

use rallycal_core::source::{
    prepare_events, LoadOptions, PreparedSchedule, Result, ScheduleSource,
};

/// Loads the schedule from `source` and prepares the display list.
///
/// Invalid records skipped in lenient mode are logged one by one at `warn`.
pub async fn load_schedule(
    source: &dyn ScheduleSource,
    options: &LoadOptions,
) -> Result<PreparedSchedule> {
    let origin = source.describe();
    tracing::debug!(source = %origin, strict = options.strict, "Loading schedule");

    let document = source.load_document().await.inspect_err(|err| {
        tracing::error!(
            source = %origin,
            kind = ?err.kind(),
            error = %err,
            "Failed to load schedule"
        );
    })?;

    let prepared = prepare_events(&document, options).inspect_err(|err| {
        tracing::error!(source = %origin, error = %err, "Rejected schedule");
    })?;

    for rejected in &prepared.rejected {
        tracing::warn!(
            position = rejected.position,
            title = %rejected.title,
            error = %rejected.error,
            "Skipping invalid event"
        );
    }

    tracing::info!(
        source = %origin,
        source_events = prepared.source_count,
        display_events = prepared.events.len(),
        rejected = prepared.rejected.len(),
        "Loaded schedule"
    );

    Ok(prepared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FileSource;
    use rallycal_core::calendar::{EventError, EventId, ExpandMode};
    use rallycal_core::source::LoadError;
    use std::io::Write;

    const DOCUMENT: &str = r#"{"events": [
        {"title": "밤샘 집회", "region": "서울",
         "startDate": "2025-06-12 20:00", "endDate": "2025-06-13 06:00"},
        {"title": "거꾸로", "region": "경기",
         "startDate": "2025-06-12 10:00", "endDate": "2025-06-11 10:00"},
        {"title": "오전 집회", "region": "경상",
         "startDate": "2025-06-12 09:00", "endDate": "2025-06-12 11:00"}
    ]}"#;

    fn document_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DOCUMENT.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_schedule_skips_invalid_records() {
        let file = document_file();
        let source = FileSource::new(file.path());

        let prepared = load_schedule(&source, &LoadOptions::default())
            .await
            .unwrap();

        assert_eq!(prepared.source_count, 3);
        assert_eq!(prepared.rejected.len(), 1);
        assert_eq!(prepared.rejected[0].position, 2);
        assert_eq!(prepared.rejected[0].error, EventError::InvalidDateRange);

        let ids: Vec<EventId> = prepared.events.iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            vec![EventId::new(3, 0), EventId::new(1, 0), EventId::new(1, 1)]
        );
    }

    #[tokio::test]
    async fn test_load_schedule_strict() {
        let file = document_file();
        let source = FileSource::new(file.path());
        let options = LoadOptions {
            strict: true,
            ..LoadOptions::default()
        };

        let err = load_schedule(&source, &options).await.unwrap_err();

        assert_eq!(
            err,
            LoadError::InvalidEvent {
                position: 2,
                error: EventError::InvalidDateRange
            }
        );
    }

    #[tokio::test]
    async fn test_load_schedule_whole_mode() {
        let file = document_file();
        let source = FileSource::new(file.path());
        let options = LoadOptions {
            mode: ExpandMode::Whole,
            ..LoadOptions::default()
        };

        let prepared = load_schedule(&source, &options).await.unwrap();

        assert_eq!(prepared.events.len(), 2);
        assert!(prepared.events[1].is_multi_day);
    }

    #[tokio::test]
    async fn test_load_schedule_propagates_fetch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.json"));

        let err = load_schedule(&source, &LoadOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::Fetch(_)));
    }
}
