//! Login form controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only writer of the session record: a record is saved after the
//! server accepts the credentials and before navigating to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use log::info;

use super::form::{FormMachine, FormMessages, FormPhase, SubmitError};
use super::view::FormView;
use super::{Navigator, Page};
use crate::net::client::RetryingClient;
use crate::net::transport::{Sleeper, Transport};
use crate::state::session::{KeyValueStore, SessionRecord, SessionStore};
use crate::util::validate::validate_login;

const MESSAGES: FormMessages = FormMessages {
    declined: "Login failed. Invalid email or password.",
    network: "A network error occurred during login.",
};

pub struct LoginController<'a, T, S, K> {
    client: &'a RetryingClient<T, S>,
    session: &'a SessionStore<K>,
    machine: FormMachine,
}

impl<'a, T: Transport, S: Sleeper, K: KeyValueStore> LoginController<'a, T, S, K> {
    pub fn new(client: &'a RetryingClient<T, S>, session: &'a SessionStore<K>) -> Self {
        Self { client, session, machine: FormMachine::default() }
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.machine.phase()
    }

    /// Handle one submit of the login form.
    ///
    /// # Errors
    ///
    /// Returns the [`SubmitError`] that was rendered into the error region;
    /// no record is written and no navigation happens in that case.
    pub async fn submit<V, N>(&self, view: &V, navigator: &N) -> Result<(), SubmitError>
    where
        V: FormView + ?Sized,
        N: Navigator + ?Sized,
    {
        let (request, resp) = self.machine.submit(view, self.client, validate_login, MESSAGES).await?;

        let record = SessionRecord { name: resp.name.unwrap_or_default(), email: request.email().to_owned() };
        if let Err(e) = self.session.save(&record) {
            return Err(self.machine.fail(view, e.into(), MESSAGES));
        }

        self.machine.enter(FormPhase::Succeeded);
        info!("login accepted; session stored");
        navigator.navigate(Page::Dashboard);
        Ok(())
    }
}
