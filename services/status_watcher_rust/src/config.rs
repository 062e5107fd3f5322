//! Configuration for status_watcher_rust

use anyhow::{anyhow, Context, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct Config {
    // Required secrets
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,

    // Endpoints
    pub endpoint: String,
    pub telegram_api_base_url: String,

    // Scheduling
    pub poll_interval: Duration,
    pub http_timeout: Duration,
    pub error_backoff_base: Duration,
    pub error_backoff_max: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. `from_env` feeds process
    /// environment through here; tests feed a map.
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut required = |key: &'static str| match get(key) {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                missing.push(key);
                String::new()
            }
        };

        let practicum_token = required("PRACTICUM_TOKEN");
        let telegram_token = required("TELEGRAM_TOKEN");
        let telegram_chat_id = required("TELEGRAM_CHAT_ID");

        if !missing.is_empty() {
            return Err(anyhow!(
                "Missing required environment variables: {}. The watcher cannot start without them.",
                missing.join(", ")
            ));
        }

        let endpoint = get("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let telegram_api_base_url =
            get("TELEGRAM_API_BASE_URL").unwrap_or_else(|| DEFAULT_TELEGRAM_API.to_string());

        let poll_interval_secs = parse_u64(&get, "POLL_INTERVAL_SECS", 600)?;
        let http_timeout_secs = parse_u64(&get, "HTTP_TIMEOUT_SECS", 10)?;
        let backoff_base_secs = parse_u64(&get, "ERROR_BACKOFF_BASE_SECS", 60)?;
        let backoff_max_secs = parse_u64(&get, "ERROR_BACKOFF_MAX_SECS", 3600)?;

        if poll_interval_secs == 0 {
            return Err(anyhow!("POLL_INTERVAL_SECS must be > 0"));
        }
        if backoff_base_secs == 0 {
            return Err(anyhow!("ERROR_BACKOFF_BASE_SECS must be > 0"));
        }
        if backoff_max_secs < backoff_base_secs {
            return Err(anyhow!(
                "ERROR_BACKOFF_MAX_SECS must be >= ERROR_BACKOFF_BASE_SECS"
            ));
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint,
            telegram_api_base_url,
            poll_interval: Duration::from_secs(poll_interval_secs),
            http_timeout: Duration::from_secs(http_timeout_secs),
            error_backoff_base: Duration::from_secs(backoff_base_secs),
            error_backoff_max: Duration::from_secs(backoff_max_secs),
        })
    }
}

fn parse_u64<F>(get: &F, key: &str, default: u64) -> Result<u64>
where
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Invalid {key}: {raw} (expected integer)")),
        None => Ok(default),
    }
}
