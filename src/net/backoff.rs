//! Exponential backoff policy.
//!
//! Pure: given how many attempts have failed so far and the latest error,
//! decide whether to retry and how long to wait first. Sleeping and UI
//! effects live with the caller.

use std::time::Duration;

use crate::config::PortalConfig;
use crate::error::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    RetryAfter(Duration),
    GiveUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackoffPolicy {
    pub max_retries: u32,
    pub base: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self::from_config(&PortalConfig::default())
    }
}

impl BackoffPolicy {
    #[must_use]
    pub fn from_config(config: &PortalConfig) -> Self {
        Self { max_retries: config.max_retries, base: config.retry_base() }
    }

    /// Delay before retry number `attempt + 1`: `2^attempt * base`.
    #[must_use]
    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.base.saturating_mul(factor)
    }

    /// `attempt` counts from 0 for the initial request.
    pub fn decide<E: ErrorCode>(&self, attempt: u32, err: &E) -> RetryDecision {
        if err.retryable() && attempt < self.max_retries {
            RetryDecision::RetryAfter(self.delay(attempt))
        } else {
            RetryDecision::GiveUp
        }
    }
}

#[cfg(test)]
#[path = "backoff_test.rs"]
mod tests;
