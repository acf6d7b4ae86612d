//! Signup form controller.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use log::info;

use super::form::{FormMachine, FormMessages, FormPhase, SubmitError};
use super::view::FormView;
use super::{Navigator, Page};
use crate::net::client::RetryingClient;
use crate::net::transport::{Sleeper, Transport};
use crate::util::validate::validate_signup;

pub const SIGNUP_CONFIRMATION: &str = "Signup successful! Please log in.";

const MESSAGES: FormMessages = FormMessages {
    declined: "Signup failed. Please try again.",
    network: "A network error occurred during signup.",
};

pub struct SignupController<'a, T, S> {
    client: &'a RetryingClient<T, S>,
    machine: FormMachine,
}

impl<'a, T: Transport, S: Sleeper> SignupController<'a, T, S> {
    pub fn new(client: &'a RetryingClient<T, S>) -> Self {
        Self { client, machine: FormMachine::default() }
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.machine.phase()
    }

    /// Handle one submit of the signup form. On success the user confirms
    /// and is sent to the login page; nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns the [`SubmitError`] that was rendered into the error region.
    pub async fn submit<V, N>(&self, view: &V, navigator: &N) -> Result<(), SubmitError>
    where
        V: FormView + ?Sized,
        N: Navigator + ?Sized,
    {
        self.machine.submit(view, self.client, validate_signup, MESSAGES).await?;

        self.machine.enter(FormPhase::Succeeded);
        info!("signup accepted");
        view.confirm(SIGNUP_CONFIRMATION);
        navigator.navigate(Page::Login);
        Ok(())
    }
}
