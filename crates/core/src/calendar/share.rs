use serde::Serialize;

use super::error::ShareError;
use super::format::{format_short_date, format_time};
use super::types::DisplayEvent;

/// Notice surfaced when no share capability is available.
pub const SHARE_UNSUPPORTED_MESSAGE: &str = "현재 환경에서는 공유 기능을 지원하지 않습니다.";

/// What gets handed to a share capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A platform facility able to share a payload (share sheet, clipboard,
/// stdout...).
pub trait ShareCapability {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Result of a share request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// No capability is present; carries the user-visible notice.
    Unsupported(&'static str),
}

/// Composes the plain-text share summary of an event.
pub fn compose_share(event: &DisplayEvent, app_name: &str, url: Option<String>) -> SharePayload {
    let text = format!(
        "[집회 알림] {}\n날짜: {}, 시간: {} - {}\n장소: {}\n\n{}",
        event.title,
        format_short_date(&event.start_date),
        format_time(&event.start_date),
        format_time(&event.end_date),
        event.location,
        event.description,
    );

    SharePayload {
        title: format!("{} - {}", app_name, event.title),
        text,
        url,
    }
}

/// Hands the payload to `capability`, or reports that sharing is unsupported.
pub fn share_event(
    capability: Option<&dyn ShareCapability>,
    payload: &SharePayload,
) -> Result<ShareOutcome, ShareError> {
    match capability {
        Some(capability) => capability.share(payload).map(|()| ShareOutcome::Shared),
        None => Ok(ShareOutcome::Unsupported(SHARE_UNSUPPORTED_MESSAGE)),
    }
}
