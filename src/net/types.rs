//! Wire schema for the action endpoint and the errors a request can raise.
//!
//! Requests are multiplexed on one URL by the `action` field. Responses carry
//! a loose `status` / `success` pair; a request counts as failed when the
//! transport fails, the HTTP status is outside 2xx, or `status` is `"error"`.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::ErrorCode;

/// Shown when no more specific message is available.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to connect to the backend service.";

// =============================================================================
// REQUEST
// =============================================================================

/// One action posted to the endpoint.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum AuthRequest {
    Signup { name: String, email: String, password: String },
    Login { email: String, password: String },
}

impl AuthRequest {
    #[must_use]
    pub fn action(&self) -> &'static str {
        match self {
            Self::Signup { .. } => "signup",
            Self::Login { .. } => "login",
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Signup { email, .. } | Self::Login { email, .. } => email,
        }
    }
}

// Passwords stay out of logs and panic messages.
impl fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signup { name, email, .. } => f
                .debug_struct("Signup")
                .field("name", name)
                .field("email", email)
                .finish_non_exhaustive(),
            Self::Login { email, .. } => f.debug_struct("Login").field("email", email).finish_non_exhaustive(),
        }
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
    Unknown,
}

impl ApiStatus {
    fn parse(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Unknown,
        }
    }
}

/// Endpoint response, read field by field.
///
/// The endpoint's typing is loose, so each field is interpreted rather than
/// strictly decoded: `status` only counts when it is a string, `success` is
/// taken by truthiness, and scalar `message` / `name` values are stringified.
/// Fields of any other shape read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    pub status: Option<ApiStatus>,
    pub success: Option<bool>,
    pub message: Option<String>,
    pub name: Option<String>,
}

impl ApiResponse {
    /// Interpret a decoded body. Non-object bodies carry no fields.
    #[must_use]
    pub fn from_value(body: &Value) -> Self {
        Self {
            status: body.get("status").and_then(Value::as_str).map(ApiStatus::parse),
            success: body.get("success").map(truthy),
            message: body.get("message").and_then(scalar_text),
            name: body.get("name").and_then(scalar_text),
        }
    }

    /// True when the server accepted the action.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success == Some(true) || self.status == Some(ApiStatus::Success)
    }

    #[must_use]
    pub fn is_error_status(&self) -> bool {
        self.status == Some(ApiStatus::Error)
    }

    /// Server message, ignoring blank strings.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// Status code and undecoded body from one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Failure of a single attempt. Every variant is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttemptError {
    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered outside the 2xx range.
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16, message: Option<String> },

    /// The server answered 2xx with `status: "error"`.
    #[error("server rejected request: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// A 2xx body that is not JSON.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl AttemptError {
    /// The most specific user-facing message this failure carries.
    #[must_use]
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::HttpStatus { status, message } => {
                Some(message.clone().unwrap_or_else(|| format!("HTTP error! status: {status}")))
            }
            Self::Rejected { message } => message.clone(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

impl ErrorCode for AttemptError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "E_TRANSPORT",
            Self::HttpStatus { .. } => "E_HTTP_STATUS",
            Self::Rejected { .. } => "E_REJECTED",
            Self::Decode(_) => "E_DECODE",
        }
    }

    // Rejections share the transport retry schedule.
    fn retryable(&self) -> bool {
        true
    }
}

/// Terminal failure of [`crate::net::client::RetryingClient::send`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("request encode failed: {0}")]
    Encode(String),

    #[error("{message}")]
    Exhausted { attempts: u32, message: String },
}

impl ClientError {
    /// Message for the error region; `None` leaves the choice to the page.
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Encode(_) => None,
            Self::Exhausted { message, .. } => Some(message),
        }
    }
}

impl ErrorCode for ClientError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Encode(_) => "E_ENCODE",
            Self::Exhausted { .. } => "E_RETRIES_EXHAUSTED",
        }
    }
}

/// Turn one raw exchange into a response or an attempt failure.
///
/// # Errors
///
/// Returns an [`AttemptError`] for non-2xx statuses, `status: "error"`
/// bodies, and 2xx bodies that are not JSON.
pub fn classify(raw: RawResponse) -> Result<ApiResponse, AttemptError> {
    let ok = raw.is_ok();
    let body = match serde_json::from_str::<Value>(&raw.body) {
        Ok(value) => ApiResponse::from_value(&value),
        Err(_) if !ok => return Err(AttemptError::HttpStatus { status: raw.status, message: None }),
        Err(e) => return Err(AttemptError::Decode(e.to_string())),
    };
    let message = body.server_message().map(str::to_owned);
    if !ok {
        Err(AttemptError::HttpStatus { status: raw.status, message })
    } else if body.is_error_status() {
        Err(AttemptError::Rejected { message })
    } else {
        Ok(body)
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
