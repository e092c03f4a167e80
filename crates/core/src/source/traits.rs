use async_trait::async_trait;

use crate::calendar::ScheduleDocument;

use super::Result;

/// Parses the raw text of a schedule document.
pub fn parse_document(raw: &str) -> Result<ScheduleDocument> {
    Ok(serde_json::from_str(raw)?)
}

/// A read-only place the schedule document is fetched from.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Where the document comes from, for logs.
    fn describe(&self) -> String;

    /// Fetches the raw document text.
    async fn fetch_raw(&self) -> Result<String>;

    /// Fetches and parses the document.
    async fn load_document(&self) -> Result<ScheduleDocument> {
        let raw = self.fetch_raw().await?;
        parse_document(&raw)
    }
}
