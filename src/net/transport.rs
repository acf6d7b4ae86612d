//! Host seams for one HTTP exchange and one timed wait.
//!
//! Browser (hydrate): `gloo-net` fetch with CORS mode and caching disabled,
//! `gloo-timers` for delays.
//! Native: `reqwest` with `Cache-Control: no-cache`, `tokio` for delays.
//!
//! Traits are `?Send` because every host here drives them from a single
//! thread; browser futures are not `Send`.

use std::time::Duration;

use serde_json::Value;

use super::types::{AttemptError, RawResponse};

/// POST a JSON body and hand back the status and raw body text.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`AttemptError::Transport`] when no response was received.
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse, AttemptError>;
}

/// Suspend the current task without blocking the thread.
#[async_trait::async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

// =============================================================================
// NATIVE
// =============================================================================

#[cfg(not(target_arch = "wasm32"))]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http })
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse, AttemptError> {
        let resp = self
            .http
            .post(url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .json(body)
            .send()
            .await
            .map_err(|e| AttemptError::Transport(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| AttemptError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub struct TokioSleeper;

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait(?Send)]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

// =============================================================================
// BROWSER
// =============================================================================

#[cfg(feature = "hydrate")]
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse, AttemptError> {
        let resp = gloo_net::http::Request::post(url)
            .mode(web_sys::RequestMode::Cors)
            .cache(web_sys::RequestCache::NoCache)
            .json(body)
            .map_err(|e| AttemptError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| AttemptError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AttemptError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(feature = "hydrate")]
pub struct TimerSleeper;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl Sleeper for TimerSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
