//! Schedule document fetched over HTTP.

use async_trait::async_trait;
use rallycal_core::source::{LoadError, Result, ScheduleSource};

/// Fetches the document with a plain GET. No retry, no explicit timeout.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    /// Create a new source for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl ScheduleSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_raw(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))
    }
}
