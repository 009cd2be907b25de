//! Bot configuration
//!
//! Defines the credentials, endpoints and polling interval of the bot.
//! Values come from the process environment, after a `.env` file in the
//! working directory has been loaded.

use std::fmt;
use std::time::Duration;

use review_client::{DEFAULT_API_URL, DEFAULT_ENDPOINT};

/// Environment variable holding the status API OAuth token
pub const PRAKTIKUM_TOKEN: &str = "PRAKTIKUM_TOKEN";
/// Environment variable holding the bot token
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the homework status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Full URL of the homework statuses endpoint
    pub practicum_endpoint: String,

    /// Base URL of the Telegram Bot API
    pub telegram_api_url: String,

    /// Delay between the end of one cycle and the start of the next
    pub poll_interval: Duration,
}

impl Config {
    /// Creates a new configuration with default endpoints and interval
    pub fn new(
        practicum_token: String,
        telegram_token: String,
        telegram_chat_id: String,
    ) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint: DEFAULT_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_API_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRAKTIKUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: production statuses endpoint)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - POLL_INTERVAL (optional, seconds, default: 5)
    ///
    /// Missing credentials are read as empty strings so that the poller
    /// can report them; see [`Config::missing_credential`].
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = |key: &str| lookup(key).map(|v| v.trim().to_string()).unwrap_or_default();

        let mut config = Self::new(
            credential(PRAKTIKUM_TOKEN),
            credential(TELEGRAM_TOKEN),
            credential(TELEGRAM_CHAT_ID),
        );

        if let Some(endpoint) = lookup("PRACTICUM_ENDPOINT") {
            config.practicum_endpoint = endpoint;
        }

        if let Some(url) = lookup("TELEGRAM_API_URL") {
            config.telegram_api_url = url;
        }

        if let Some(raw) = lookup("POLL_INTERVAL") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| anyhow::anyhow!("POLL_INTERVAL must be a number of seconds: {}", e))?;
            config.poll_interval = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Returns the name of the first credential that is empty, if any
    pub fn missing_credential(&self) -> Option<&'static str> {
        [
            (PRAKTIKUM_TOKEN, &self.practicum_token),
            (TELEGRAM_TOKEN, &self.telegram_token),
            (TELEGRAM_CHAT_ID, &self.telegram_chat_id),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
    }

    /// Validates endpoints and interval
    ///
    /// Credentials are checked by the poller before its first request.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, url) in [
            ("practicum_endpoint", &self.practicum_endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        Ok(())
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn full_env() -> Vec<(&'static str, &'static str)> {
        vec![
            (PRAKTIKUM_TOKEN, "p-token"),
            (TELEGRAM_TOKEN, "t-token"),
            (TELEGRAM_CHAT_ID, "42"),
        ]
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&full_env())).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.practicum_endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.telegram_api_url, DEFAULT_API_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let mut env = full_env();
        env.push(("POLL_INTERVAL", "60"));
        env.push(("PRACTICUM_ENDPOINT", "http://localhost:9000/statuses/"));
        env.push(("TELEGRAM_API_URL", "http://localhost:9001"));

        let config = Config::from_lookup(lookup(&env)).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(60));
        assert_eq!(config.practicum_endpoint, "http://localhost:9000/statuses/");
        assert_eq!(config.telegram_api_url, "http://localhost:9001");
    }

    #[test]
    fn test_bad_poll_interval() {
        let mut env = full_env();
        env.push(("POLL_INTERVAL", "soon"));
        assert!(Config::from_lookup(lookup(&env)).is_err());
    }

    #[test]
    fn test_missing_credentials() {
        let config = Config::from_lookup(lookup(&[(PRAKTIKUM_TOKEN, "p")])).unwrap();
        assert_eq!(config.missing_credential(), Some(TELEGRAM_TOKEN));
        assert!(config.validate().is_ok());

        let config = Config::from_lookup(lookup(&[
            (PRAKTIKUM_TOKEN, "p"),
            (TELEGRAM_TOKEN, "t"),
            (TELEGRAM_CHAT_ID, "   "),
        ]))
        .unwrap();
        assert_eq!(config.missing_credential(), Some(TELEGRAM_CHAT_ID));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::new("p".to_string(), "t".to_string(), "42".to_string());
        assert!(config.validate().is_ok());

        config.practicum_endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());

        config.practicum_endpoint = DEFAULT_ENDPOINT.to_string();
        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let config = Config::new("p-secret".to_string(), "t-secret".to_string(), "42".to_string());
        let debug = format!("{:?}", config);
        assert!(!debug.contains("p-secret"));
        assert!(!debug.contains("t-secret"));
        assert!(debug.contains("42"));
    }
}
