use super::*;
use crate::net::types::AttemptError;

#[derive(Debug, thiserror::Error)]
#[error("fatal")]
struct Fatal;

impl ErrorCode for Fatal {
    fn error_code(&self) -> &'static str {
        "E_FATAL"
    }
}

#[test]
fn delay_doubles_from_one_second() {
    let policy = BackoffPolicy::default();
    assert_eq!(policy.delay(0), Duration::from_millis(1000));
    assert_eq!(policy.delay(1), Duration::from_millis(2000));
    assert_eq!(policy.delay(2), Duration::from_millis(4000));
}

#[test]
fn delay_saturates_instead_of_overflowing() {
    let policy = BackoffPolicy { max_retries: 100, base: Duration::from_secs(1) };
    assert_eq!(policy.delay(40), Duration::from_secs(u64::from(u32::MAX)));
}

#[test]
fn decide_retries_until_max_then_gives_up() {
    let policy = BackoffPolicy { max_retries: 3, base: Duration::from_millis(1000) };
    let err = AttemptError::Transport("offline".into());
    assert_eq!(policy.decide(0, &err), RetryDecision::RetryAfter(Duration::from_millis(1000)));
    assert_eq!(policy.decide(2, &err), RetryDecision::RetryAfter(Duration::from_millis(4000)));
    assert_eq!(policy.decide(3, &err), RetryDecision::GiveUp);
}

#[test]
fn decide_zero_retries_never_waits() {
    let policy = BackoffPolicy { max_retries: 0, base: Duration::from_millis(1000) };
    let err = AttemptError::Rejected { message: None };
    assert_eq!(policy.decide(0, &err), RetryDecision::GiveUp);
}

#[test]
fn decide_gives_up_on_non_retryable_error() {
    let policy = BackoffPolicy::default();
    assert_eq!(policy.decide(0, &Fatal), RetryDecision::GiveUp);
}

#[test]
fn from_config_uses_configured_values() {
    let config = PortalConfig { max_retries: 1, retry_base_ms: 50, ..PortalConfig::default() };
    let policy = BackoffPolicy::from_config(&config);
    assert_eq!(policy, BackoffPolicy { max_retries: 1, base: Duration::from_millis(50) });
}
