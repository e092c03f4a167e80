use std::env;

use chrono_tz::Tz;

use crate::error::{ClientError, Result};

pub const DEFAULT_TIMEZONE: &str = "Asia/Seoul";
pub const DEFAULT_APP_NAME: &str = "집회 일정";
pub const DEFAULT_UID_DOMAIN: &str = "rallycal.local";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Zone the schedule's wall-clock timestamps are written in (default: Asia/Seoul)
    pub timezone: Tz,
    /// Used in share titles and the calendar PRODID (default: "집회 일정")
    pub app_name: String,
    /// Domain part of exported calendar UIDs (default: "rallycal.local")
    pub uid_domain: String,
    /// Link attached to shared events (default: none)
    pub share_url: Option<String>,
    /// Fail the load on the first invalid record (default: false)
    pub strict: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RALLYCAL_TIMEZONE` - IANA zone name (default: "Asia/Seoul")
    /// - `RALLYCAL_APP_NAME` - Application name (default: "집회 일정")
    /// - `RALLYCAL_UID_DOMAIN` - Calendar UID domain (default: "rallycal.local")
    /// - `RALLYCAL_SHARE_URL` - Link attached to shared events (default: unset)
    /// - `RALLYCAL_STRICT` - `1`/`true`/`yes` to reject invalid records (default: false)
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timezone = match var("RALLYCAL_TIMEZONE") {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|_| ClientError::Config(format!("unknown time zone: {name}")))?,
            None => chrono_tz::Asia::Seoul,
        };

        Ok(Self {
            timezone,
            app_name: var("RALLYCAL_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            uid_domain: var("RALLYCAL_UID_DOMAIN")
                .unwrap_or_else(|| DEFAULT_UID_DOMAIN.to_string()),
            share_url: var("RALLYCAL_SHARE_URL").filter(|url| !url.trim().is_empty()),
            strict: var("RALLYCAL_STRICT").is_some_and(|v| parse_flag(&v)),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::Asia::Seoul,
            app_name: DEFAULT_APP_NAME.to_string(),
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
            share_url: None,
            strict: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| map.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = vars(&[]).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.timezone.name(), DEFAULT_TIMEZONE);
        assert_eq!(config.app_name, "집회 일정");
        assert!(!config.strict);
    }

    #[test]
    fn test_overrides() {
        let config = vars(&[
            ("RALLYCAL_TIMEZONE", "Europe/Berlin"),
            ("RALLYCAL_APP_NAME", "My Calendar"),
            ("RALLYCAL_UID_DOMAIN", "example.org"),
            ("RALLYCAL_SHARE_URL", "https://example.org/calendar"),
            ("RALLYCAL_STRICT", "TRUE"),
        ])
        .unwrap();

        assert_eq!(config.timezone, chrono_tz::Europe::Berlin);
        assert_eq!(config.app_name, "My Calendar");
        assert_eq!(config.uid_domain, "example.org");
        assert_eq!(
            config.share_url.as_deref(),
            Some("https://example.org/calendar")
        );
        assert!(config.strict);
    }

    #[test]
    fn test_invalid_timezone() {
        let err = vars(&[("RALLYCAL_TIMEZONE", "Mars/Olympus")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: unknown time zone: Mars/Olympus"
        );
    }

    #[test]
    fn test_strict_flag_values() {
        assert!(!vars(&[("RALLYCAL_STRICT", "0")]).unwrap().strict);
        assert!(!vars(&[("RALLYCAL_STRICT", "nope")]).unwrap().strict);
        assert!(vars(&[("RALLYCAL_STRICT", " yes ")]).unwrap().strict);
    }

    #[test]
    fn test_blank_share_url_is_unset() {
        assert_eq!(vars(&[("RALLYCAL_SHARE_URL", "  ")]).unwrap().share_url, None);
    }
}
