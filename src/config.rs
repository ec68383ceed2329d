//! Runtime configuration, read from the environment.

use anyhow::{bail, Context, Result};
use std::time::Duration;

use crate::constants::{ENV_API_KEY, ENV_BASE_URL, ENV_TIMEOUT_SECS, WEATHERAPI_BASE};

/// Settings for talking to weatherapi.com
#[derive(Debug, Clone)]
pub struct Config {
    /// API credential sent as the `key` query parameter
    pub api_key: String,
    /// Base URL without trailing slash
    pub base_url: String,
    /// Request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Loads the configuration from `WEATHERAPI_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .map(|key| key.trim().to_string())
            .unwrap_or_default();
        if api_key.is_empty() {
            bail!("{} must be set to a weatherapi.com API key", ENV_API_KEY);
        }

        let base_url = lookup(ENV_BASE_URL)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| WEATHERAPI_BASE.to_string());

        let mut config = Self::new(api_key, base_url.trim());

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{} is not a whole number of seconds: {:?}", ENV_TIMEOUT_SECS, raw))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
