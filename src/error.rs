//! Shared error tagging.
//!
//! Every error a form can surface (validation, attempt, client, storage,
//! config) carries a stable `E_*` code for log lines, and says whether the
//! retrying client may try again after it.

pub trait ErrorCode: std::fmt::Display {
    /// Stable tag logged next to the message, e.g. `E_RETRIES_EXHAUSTED`.
    fn error_code(&self) -> &'static str;

    /// Whether [`crate::net::backoff::BackoffPolicy`] schedules another attempt.
    fn retryable(&self) -> bool {
        false
    }
}
