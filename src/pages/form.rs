//! Submission flow shared by the signup and login controllers.
//!
//! DESIGN
//! ======
//! `Idle → Validating → Submitting → {Succeeded, Failed}`. Validation always
//! finishes before any request starts, and the busy indicator is held by a
//! guard around the whole retrying call. A failed phase can be resubmitted.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is rendered as one line in the error region and also
//! returned, so hosts can log or assert on it. Nothing is fatal to the page.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::cell::Cell;

use log::{debug, warn};

use super::view::{FormView, while_busy};
use crate::error::ErrorCode;
use crate::net::client::RetryingClient;
use crate::net::transport::{Sleeper, Transport};
use crate::net::types::{ApiResponse, AuthRequest, ClientError};
use crate::state::session::StorageError;
use crate::util::validate::{Credentials, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl FormPhase {
    #[must_use]
    pub fn in_flight(self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Client(#[from] ClientError),
    /// Well-formed response that neither failed nor succeeded; carries the
    /// message to render.
    #[error("declined: {0}")]
    Declined(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SubmitError {
    /// The line to render, falling back to the page's network message.
    #[must_use]
    pub fn user_message(&self, network_fallback: &str) -> String {
        match self {
            Self::Invalid(e) => e.to_string(),
            Self::Client(e) => e.user_message().unwrap_or(network_fallback).to_owned(),
            Self::Declined(message) => message.clone(),
            Self::InFlight | Self::Storage(_) => network_fallback.to_owned(),
        }
    }
}

impl ErrorCode for SubmitError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InFlight => "E_IN_FLIGHT",
            Self::Invalid(e) => e.error_code(),
            Self::Client(e) => e.error_code(),
            Self::Declined(_) => "E_DECLINED",
            Self::Storage(e) => e.error_code(),
        }
    }
}

/// Page-specific fallback copy.
#[derive(Debug, Clone, Copy)]
pub struct FormMessages {
    /// Shown when the server declines without a message.
    pub declined: &'static str,
    /// Shown when a failure carries no message at all.
    pub network: &'static str,
}

/// Phase tracker for one form.
#[derive(Debug, Default)]
pub struct FormMachine {
    phase: Cell<FormPhase>,
}

impl FormMachine {
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase.get()
    }

    pub(crate) fn enter(&self, next: FormPhase) {
        debug!("form phase {:?} -> {next:?}", self.phase.get());
        self.phase.set(next);
    }

    /// Render `err`, move to `Failed`, and hand the error back.
    pub(crate) fn fail<V: FormView + ?Sized>(&self, view: &V, err: SubmitError, messages: FormMessages) -> SubmitError {
        warn!("form submission failed ({}): {err}", err.error_code());
        view.show_error(&err.user_message(messages.network));
        self.enter(FormPhase::Failed);
        err
    }

    /// Validate, send, and return the request with its accepted response.
    /// Failures are already rendered when this returns `Err`; the caller owns
    /// the success transition.
    pub(crate) async fn submit<V, T, S>(
        &self,
        view: &V,
        client: &RetryingClient<T, S>,
        validate: fn(&Credentials) -> Result<AuthRequest, ValidationError>,
        messages: FormMessages,
    ) -> Result<(AuthRequest, ApiResponse), SubmitError>
    where
        V: FormView + ?Sized,
        T: Transport,
        S: Sleeper,
    {
        if self.phase().in_flight() {
            return Err(SubmitError::InFlight);
        }

        self.enter(FormPhase::Validating);
        view.clear_error();
        let request = match validate(&view.credentials()) {
            Ok(request) => request,
            Err(e) => return Err(self.fail(view, e.into(), messages)),
        };

        self.enter(FormPhase::Submitting);
        match while_busy(view, client.send(&request)).await {
            Ok(resp) if resp.is_success() => Ok((request, resp)),
            Ok(resp) => {
                let message = resp.server_message().unwrap_or(messages.declined).to_owned();
                Err(self.fail(view, SubmitError::Declined(message), messages))
            }
            Err(e) => Err(self.fail(view, e.into(), messages)),
        }
    }
}
