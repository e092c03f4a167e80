//! Schedule document read from the local filesystem.

use std::path::PathBuf;

use async_trait::async_trait;
use rallycal_core::source::{LoadError, Result, ScheduleSource};

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ScheduleSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_raw(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::Fetch(format!("{}: {}", self.path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"events": [{{"title": "제주 집회", "region": "제주",
                "startDate": "2025-07-05 15:00", "endDate": "2025-07-05 16:00",
                "mapUrl": ""}}]}}"#
        )
        .unwrap();

        let source = FileSource::new(file.path());
        let document = source.load_document().await.unwrap();

        assert_eq!(document.events.len(), 1);
        assert_eq!(document.events[0].region, "제주");
        assert_eq!(document.events[0].map_url, None);
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = FileSource::new(&path).fetch_raw().await.unwrap_err();

        match err {
            LoadError::Fetch(message) => assert!(message.contains("nope.json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_document_without_events_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"items": []}}"#).unwrap();

        let err = FileSource::new(file.path())
            .load_document()
            .await
            .unwrap_err();

        assert!(matches!(err, LoadError::Parse(_)));
    }
}
