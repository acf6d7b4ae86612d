//! Endpoint and retry configuration.
//!
//! Native hosts read environment variables at runtime; the browser build
//! bakes the endpoint in at compile time because there is no process
//! environment to consult.

use std::time::Duration;

use crate::error::ErrorCode;

pub const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/AKfycbyjKdVTHi4YCB_9K36x1XewbBwWKc2y_9PA9Wp6BlpognwaueXA88H98tUuYKiMx1i2/exec";
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_BASE_MS: u64 = 1000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    EmptyUrl { var: &'static str },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyUrl { .. } => "E_CONFIG_EMPTY_URL",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub api_url: String,
    pub max_retries: u32,
    pub retry_base_ms: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_ms: DEFAULT_RETRY_BASE_MS,
        }
    }
}

impl PortalConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORTAL_API_URL`: endpoint receiving every action
    /// - `PORTAL_MAX_RETRIES`: default 3
    /// - `PORTAL_RETRY_BASE_MS`: default 1000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUrl`] if `PORTAL_API_URL` is set but blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = match std::env::var("PORTAL_API_URL") {
            Ok(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyUrl { var: "PORTAL_API_URL" }),
            Ok(raw) => raw.trim().to_owned(),
            Err(_) => DEFAULT_API_URL.to_owned(),
        };
        Ok(Self {
            api_url,
            max_retries: env_parse("PORTAL_MAX_RETRIES", DEFAULT_MAX_RETRIES),
            retry_base_ms: env_parse("PORTAL_RETRY_BASE_MS", DEFAULT_RETRY_BASE_MS),
        })
    }

    /// Config for the browser build, with the endpoint fixed at compile time.
    #[must_use]
    pub fn compiled() -> Self {
        let api_url = option_env!("PORTAL_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_owned();
        Self { api_url, ..Self::default() }
    }

    #[must_use]
    pub fn retry_base(&self) -> Duration {
        Duration::from_millis(self.retry_base_ms)
    }
}

/// Parse `PORTAL_*` tuning values; unset or malformed values keep the default.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
