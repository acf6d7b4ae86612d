//! Retrying client for the action endpoint.
//!
//! DESIGN
//! ======
//! `send` loops over attempts: post, classify, and on failure ask the
//! [`BackoffPolicy`] whether to wait and go again. Attempts run strictly one
//! after another; there is no cancellation and no timeout beyond the backoff
//! schedule. The busy indicator is not touched here; callers wrap `send` in
//! a [`crate::pages::view::BusyGuard`].
//!
//! No deduplication is attempted, so a retried signup may reach a
//! non-idempotent backend more than once.

use log::{debug, warn};

use super::backoff::{BackoffPolicy, RetryDecision};
use super::transport::{Sleeper, Transport};
use super::types::{ApiResponse, AuthRequest, ClientError, GENERIC_FAILURE_MESSAGE, classify};
use crate::config::PortalConfig;
use crate::error::ErrorCode;

pub struct RetryingClient<T, S> {
    transport: T,
    sleeper: S,
    endpoint: String,
    policy: BackoffPolicy,
}

impl<T: Transport, S: Sleeper> RetryingClient<T, S> {
    pub fn new(transport: T, sleeper: S, endpoint: impl Into<String>, policy: BackoffPolicy) -> Self {
        Self { transport, sleeper, endpoint: endpoint.into(), policy }
    }

    pub fn from_config(transport: T, sleeper: S, config: &PortalConfig) -> Self {
        Self::new(transport, sleeper, config.api_url.clone(), BackoffPolicy::from_config(config))
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn policy(&self) -> BackoffPolicy {
        self.policy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Post `request` to the configured endpoint.
    ///
    /// # Errors
    ///
    /// See [`RetryingClient::send_to`].
    pub async fn send(&self, request: &AuthRequest) -> Result<ApiResponse, ClientError> {
        self.send_to(&self.endpoint, request).await
    }

    /// Post `request` to `endpoint`, retrying every failed attempt with
    /// exponential backoff until the policy gives up.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Exhausted`] carrying the last attempt's most
    /// specific message once retries run out, or [`ClientError::Encode`] if
    /// the request cannot be serialized.
    pub async fn send_to(&self, endpoint: &str, request: &AuthRequest) -> Result<ApiResponse, ClientError> {
        let body = serde_json::to_value(request).map_err(|e| ClientError::Encode(e.to_string()))?;
        let action = request.action();

        let mut attempt: u32 = 0;
        loop {
            debug!("{action}: attempt {} to {endpoint}", attempt + 1);
            let result = match self.transport.post_json(endpoint, &body).await {
                Ok(raw) => classify(raw),
                Err(e) => Err(e),
            };
            let err = match result {
                Ok(resp) => return Ok(resp),
                Err(err) => err,
            };

            match self.policy.decide(attempt, &err) {
                RetryDecision::RetryAfter(delay) => {
                    warn!(
                        "{action}: attempt {} failed ({}): {err}; retrying in {} ms",
                        attempt + 1,
                        err.error_code(),
                        delay.as_millis()
                    );
                    self.sleeper.sleep(delay).await;
                    attempt += 1;
                }
                RetryDecision::GiveUp => {
                    let attempts = attempt + 1;
                    warn!("{action}: giving up after {attempts} attempts ({}): {err}", err.error_code());
                    let message = err
                        .user_message()
                        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned());
                    return Err(ClientError::Exhausted { attempts, message });
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
