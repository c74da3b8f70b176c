use crate::assistant::DEFAULT_REPLY_DELAY;
use crate::store::{DataStore, MemoryStore, RestStore, StoreError, StoreResult};
use crate::weather::DEFAULT_WEATHER_DELAY;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Defaults shipped with every build (web and mobile have no `.env`).
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const STORE_URL_KEY: &str = "WUKIR_STORE_URL";
pub const STORE_KEY_KEY: &str = "WUKIR_STORE_KEY";
pub const REPLY_DELAY_KEY: &str = "WUKIR_REPLY_DELAY_MS";
pub const WEATHER_DELAY_KEY: &str = "WUKIR_WEATHER_DELAY_MS";

/// Runtime settings, read once from the environment after `.env` loading.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub store_url: Option<String>,
    pub store_key: Option<String>,
    pub reply_delay: Duration,
    pub weather_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_url: None,
            store_key: None,
            reply_delay: DEFAULT_REPLY_DELAY,
            weather_delay: DEFAULT_WEATHER_DELAY,
        }
    }
}

/// `KEY=VALUE` lines; blank lines and `#` comments are skipped.
pub fn parse_env_lines(contents: &str) -> impl Iterator<Item = (&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
}

impl AppConfig {
    /// Process environment first, then the bundled `assets/config.env`.
    pub fn load() -> Self {
        let bundled: HashMap<&str, &str> = parse_env_lines(BUNDLED_CONFIG).collect();
        Self::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| bundled.get(key).map(|value| value.to_string()))
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let millis = |key: &str, default: Duration| match non_empty(key) {
            None => default,
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    tracing::warn!(key, value = %raw, "ignoring invalid delay");
                    default
                }
            },
        };

        Self {
            store_url: non_empty(STORE_URL_KEY),
            store_key: non_empty(STORE_KEY_KEY),
            reply_delay: millis(REPLY_DELAY_KEY, DEFAULT_REPLY_DELAY),
            weather_delay: millis(WEATHER_DELAY_KEY, DEFAULT_WEATHER_DELAY),
        }
    }

    pub fn rest_store(&self) -> StoreResult<RestStore> {
        let url = self
            .store_url
            .as_deref()
            .ok_or(StoreError::NotConfigured(STORE_URL_KEY))?;
        let key = self
            .store_key
            .as_deref()
            .ok_or(StoreError::NotConfigured(STORE_KEY_KEY))?;
        Ok(RestStore::new(url, key))
    }

    /// The REST backend when configured, otherwise the seeded in-memory one.
    pub fn build_store(&self) -> Arc<dyn DataStore> {
        match self.rest_store() {
            Ok(store) => {
                tracing::info!(url = self.store_url.as_deref().unwrap_or_default(), "using REST data store");
                Arc::new(store)
            }
            Err(err) => {
                tracing::warn!(error = %err, "falling back to in-memory demo data");
                Arc::new(MemoryStore::seeded())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn env_lines_skip_comments_and_blanks() {
        let parsed = parse_env_lines("# store\n\nWUKIR_STORE_URL = https://x.supabase.co\nBROKEN\n")
            .collect::<Vec<_>>();
        assert_eq!(parsed, vec![("WUKIR_STORE_URL", "https://x.supabase.co")]);
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config(&[]), AppConfig::default());
    }

    #[test]
    fn delays_are_read_in_milliseconds() {
        let cfg = config(&[(REPLY_DELAY_KEY, "250"), (WEATHER_DELAY_KEY, "0")]);
        assert_eq!(cfg.reply_delay, Duration::from_millis(250));
        assert_eq!(cfg.weather_delay, Duration::ZERO);
    }

    #[test]
    fn invalid_delay_keeps_default() {
        let cfg = config(&[(REPLY_DELAY_KEY, "soon")]);
        assert_eq!(cfg.reply_delay, DEFAULT_REPLY_DELAY);
    }

    #[test]
    fn rest_store_needs_both_url_and_key() {
        let cfg = config(&[(STORE_URL_KEY, "https://x.supabase.co"), (STORE_KEY_KEY, "  ")]);
        assert!(matches!(
            cfg.rest_store(),
            Err(StoreError::NotConfigured(STORE_KEY_KEY))
        ));

        let cfg = config(&[(STORE_URL_KEY, "https://x.supabase.co"), (STORE_KEY_KEY, "anon")]);
        assert!(cfg.rest_store().is_ok());
    }
}
