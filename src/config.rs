//! Application configuration
//!
//! Values come from `SERMON_*` environment variables. On wasm32 they are baked
//! in at compile time (the browser has no process environment); native hosts
//! read them at runtime.

use std::time::Duration;
use thiserror::Error;

pub const ENV_API_URL: &str = "SERMON_API_URL";
pub const ENV_SEARCH_DEBOUNCE_MS: &str = "SERMON_SEARCH_DEBOUNCE_MS";
pub const ENV_SEARCH_LIMIT: &str = "SERMON_SEARCH_LIMIT";
pub const ENV_SEARCH_DISCARD_STALE: &str = "SERMON_SEARCH_DISCARD_STALE";
pub const ENV_SNACKBAR_DURATION_MS: &str = "SERMON_SNACKBAR_DURATION_MS";

/// Collection holding sermon records on the backend
pub const SERMONS_COLLECTION: &str = "sermons";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("API URL is not provided (set SERMON_API_URL)")]
    MissingApiUrl,

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// How the search box reconciles responses that resolve out of order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseOrdering {
    /// Whichever response resolves last overwrites the results
    #[default]
    LastResponseWins,
    /// Responses belonging to an older fetch than the newest one are dropped
    LatestRequestWins,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub collection: String,
    pub debounce: Duration,
    pub result_limit: u32,
    pub ordering: ResponseOrdering,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            collection: SERMONS_COLLECTION.to_string(),
            debounce: Duration::from_millis(500),
            result_limit: 3,
            ordering: ResponseOrdering::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationConfig {
    pub default_duration: Duration,
    /// Delay before the countdown starts so the enter transition is visible
    pub settle: Duration,
    /// Length of the fade-out transition
    pub fade: Duration,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration: Duration::from_millis(5000),
            settle: Duration::from_millis(100),
            fade: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub search: SearchConfig,
    pub notifications: NotificationConfig,
}

impl AppConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            search: SearchConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }

    /// Load configuration from the build-time environment (wasm32)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                ENV_API_URL => option_env!("SERMON_API_URL"),
                ENV_SEARCH_DEBOUNCE_MS => option_env!("SERMON_SEARCH_DEBOUNCE_MS"),
                ENV_SEARCH_LIMIT => option_env!("SERMON_SEARCH_LIMIT"),
                ENV_SEARCH_DISCARD_STALE => option_env!("SERMON_SEARCH_DISCARD_STALE"),
                ENV_SNACKBAR_DURATION_MS => option_env!("SERMON_SNACKBAR_DURATION_MS"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Load configuration from the process environment (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup(ENV_API_URL)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;

        let mut config = Self::new(api_url);

        if let Some(ms) = parse_number::<u64>(&lookup, ENV_SEARCH_DEBOUNCE_MS)? {
            config.search.debounce = Duration::from_millis(ms);
        }
        if let Some(limit) = parse_number::<u32>(&lookup, ENV_SEARCH_LIMIT)? {
            if limit == 0 {
                return Err(ConfigError::InvalidValue {
                    key: ENV_SEARCH_LIMIT,
                    value: limit.to_string(),
                });
            }
            config.search.result_limit = limit;
        }
        if let Some(raw) = lookup(ENV_SEARCH_DISCARD_STALE) {
            config.search.ordering = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => ResponseOrdering::LatestRequestWins,
                "0" | "false" | "no" | "off" | "" => ResponseOrdering::LastResponseWins,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: ENV_SEARCH_DISCARD_STALE,
                        value: raw,
                    });
                }
            };
        }
        if let Some(ms) = parse_number::<u64>(&lookup, ENV_SNACKBAR_DURATION_MS)? {
            config.notifications.default_duration = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_with_only_api_url() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_API_URL, "http://localhost:8090/")])).unwrap();

        assert_eq!(config.api_url, "http://localhost:8090");
        assert_eq!(config.search.collection, "sermons");
        assert_eq!(config.search.debounce, Duration::from_millis(500));
        assert_eq!(config.search.result_limit, 3);
        assert_eq!(config.search.ordering, ResponseOrdering::LastResponseWins);
        assert_eq!(config.notifications.default_duration, Duration::from_millis(5000));
        assert_eq!(config.notifications.settle, Duration::from_millis(100));
        assert_eq!(config.notifications.fade, Duration::from_millis(300));
    }

    #[test]
    fn test_missing_api_url() {
        assert_eq!(AppConfig::from_lookup(lookup_from(&[])), Err(ConfigError::MissingApiUrl));
        assert_eq!(
            AppConfig::from_lookup(lookup_from(&[(ENV_API_URL, "  ")])),
            Err(ConfigError::MissingApiUrl)
        );
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "https://api.example.org"),
            (ENV_SEARCH_DEBOUNCE_MS, "250"),
            (ENV_SEARCH_LIMIT, "5"),
            (ENV_SEARCH_DISCARD_STALE, "true"),
            (ENV_SNACKBAR_DURATION_MS, "8000"),
        ]))
        .unwrap();

        assert_eq!(config.search.debounce, Duration::from_millis(250));
        assert_eq!(config.search.result_limit, 5);
        assert_eq!(config.search.ordering, ResponseOrdering::LatestRequestWins);
        assert_eq!(config.notifications.default_duration, Duration::from_millis(8000));
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "http://localhost:8090"),
            (ENV_SEARCH_DEBOUNCE_MS, "soon"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue { key: ENV_SEARCH_DEBOUNCE_MS, value: "soon".to_string() }
        );

        assert!(AppConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "http://localhost:8090"),
            (ENV_SEARCH_LIMIT, "0"),
        ]))
        .is_err());

        assert!(AppConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "http://localhost:8090"),
            (ENV_SEARCH_DISCARD_STALE, "maybe"),
        ]))
        .is_err());
    }
}
