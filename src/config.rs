//! Process configuration, read from environment variables.
//!
//! | Variable                          | Default                                        |
//! |-----------------------------------|------------------------------------------------|
//! | `TARIFF_BIND`                     | `0.0.0.0:8080`                                 |
//! | `TARIFF_API_KEY` (or `API_KEY`)   | unset: every protected request is rejected     |
//! | `TARIFF_REMOTE_URL`               | `http://localhost:8080/dummy-remote-tariffs`   |
//! | `TARIFF_SYNC_ENABLED`             | `true`                                         |
//! | `TARIFF_SYNC_INTERVAL_SECS`       | `60`                                           |
//! | `TARIFF_SYNC_INITIAL_DELAY_SECS`  | `0`                                            |
//! | `TARIFF_FETCH_TIMEOUT_SECS`       | `10`                                           |
//! | `TARIFF_LOG_JSON`                 | `false`                                        |

use std::time::Duration;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_REMOTE_URL: &str = "http://localhost:8080/dummy-remote-tariffs";
/// Upper bound for the sync interval and initial delay (one week).
pub const MAX_SCHEDULE_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind: String,
    pub api_key: Option<String>,
    pub log_json: bool,
    pub sync: SyncConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub enabled: bool,
    pub remote_url: String,
    pub interval: Duration,
    pub initial_delay: Duration,
    pub fetch_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from any name to value lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            bind: text("TARIFF_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string()),
            api_key: text("TARIFF_API_KEY").or_else(|| text("API_KEY")),
            log_json: parse_bool(text("TARIFF_LOG_JSON"), false),
            sync: SyncConfig {
                enabled: parse_bool(text("TARIFF_SYNC_ENABLED"), true),
                remote_url: text("TARIFF_REMOTE_URL")
                    .unwrap_or_else(|| DEFAULT_REMOTE_URL.to_string()),
                interval: Duration::from_secs(
                    parse_u64(text("TARIFF_SYNC_INTERVAL_SECS"), 60).clamp(1, MAX_SCHEDULE_SECS),
                ),
                initial_delay: Duration::from_secs(
                    parse_u64(text("TARIFF_SYNC_INITIAL_DELAY_SECS"), 0).min(MAX_SCHEDULE_SECS),
                ),
                fetch_timeout: Duration::from_secs(
                    parse_u64(text("TARIFF_FETCH_TIMEOUT_SECS"), 10).max(1),
                ),
            },
        }
    }
}

fn parse_bool(value: Option<String>, default: bool) -> bool {
    value
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "True" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "False" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn parse_u64(value: Option<String>, default: u64) -> u64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
