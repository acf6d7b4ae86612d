//! Fakes for the host seams, shared by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use serde_json::Value;

use crate::net::backoff::BackoffPolicy;
use crate::net::client::RetryingClient;
use crate::net::transport::{Sleeper, Transport};
use crate::net::types::{AttemptError, RawResponse};
use crate::pages::Navigator;
use crate::pages::Page;
use crate::pages::view::{DashboardView, FormView};
use crate::util::greeting::Clock;
use crate::util::validate::Credentials;

pub const TEST_ENDPOINT: &str = "https://backend.test/exec";

// =============================================================================
// NETWORK
// =============================================================================

/// Replays a fixed list of outcomes, one per request, and records bodies.
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Result<RawResponse, AttemptError>>>,
    requests: RefCell<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Result<RawResponse, AttemptError>>) -> Self {
        Self { script: RefCell::new(script.into()), requests: RefCell::new(Vec::new()) }
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse, AttemptError> {
        self.requests.borrow_mut().push((url.to_owned(), body.clone()));
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AttemptError::Transport("script exhausted".into())))
    }
}

pub fn respond(status: u16, body: Value) -> Result<RawResponse, AttemptError> {
    Ok(RawResponse { status, body: body.to_string() })
}

pub fn offline() -> Result<RawResponse, AttemptError> {
    Err(AttemptError::Transport("Failed to fetch".into()))
}

/// Records requested delays and returns immediately.
#[derive(Default)]
pub struct RecordingSleeper {
    delays: RefCell<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.borrow_mut().push(duration);
    }
}

pub type TestClient = RetryingClient<ScriptedTransport, RecordingSleeper>;

pub fn test_client(script: Vec<Result<RawResponse, AttemptError>>) -> TestClient {
    RetryingClient::new(
        ScriptedTransport::new(script),
        RecordingSleeper::default(),
        TEST_ENDPOINT,
        BackoffPolicy::default(),
    )
}

// =============================================================================
// VIEW
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    ClearError,
    Error(String),
    Busy(bool),
    Confirm(String),
    Greeting(String),
}

pub struct RecordingView {
    credentials: Credentials,
    has_greeting: bool,
    events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self { credentials, has_greeting: true, events: RefCell::new(Vec::new()) }
    }

    pub fn signup(name: &str, email: &str, password: &str) -> Self {
        Self::with_credentials(Credentials {
            name: Some(name.to_owned()),
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }

    pub fn login(email: &str, password: &str) -> Self {
        Self::with_credentials(Credentials { name: None, email: email.to_owned(), password: password.to_owned() })
    }

    pub fn dashboard() -> Self {
        Self::login("", "")
    }

    pub fn without_greeting_target(mut self) -> Self {
        self.has_greeting = false;
        self
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Error(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl FormView for RecordingView {
    fn credentials(&self) -> Credentials {
        self.credentials.clone()
    }

    fn clear_error(&self) {
        self.record(ViewEvent::ClearError);
    }

    fn show_error(&self, message: &str) {
        self.record(ViewEvent::Error(message.to_owned()));
    }

    fn set_busy(&self, busy: bool) {
        self.record(ViewEvent::Busy(busy));
    }

    fn confirm(&self, message: &str) {
        self.record(ViewEvent::Confirm(message.to_owned()));
    }
}

impl DashboardView for RecordingView {
    fn has_greeting_target(&self) -> bool {
        self.has_greeting
    }

    fn show_greeting(&self, text: &str) {
        self.record(ViewEvent::Greeting(text.to_owned()));
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<Page>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<Page> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, page: Page) {
        self.visits.borrow_mut().push(page);
    }
}

pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn local_hour(&self) -> u32 {
        self.0
    }
}
