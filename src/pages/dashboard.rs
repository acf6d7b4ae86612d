//! Dashboard initializer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session record gates this page. Without one (or without somewhere to
//! render the greeting) the user is sent back to login before anything is
//! shown.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use log::{info, warn};

use super::view::DashboardView;
use super::{Navigator, Page};
use crate::error::ErrorCode;
use crate::state::session::{KeyValueStore, SessionRecord, SessionStore};
use crate::util::greeting::{Clock, greeting_for};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardOutcome {
    Greeted(String),
    Redirected,
}

/// Render the greeting for the stored user, or redirect to login.
pub fn initialize_dashboard<K, V, N, C>(
    session: &SessionStore<K>,
    view: &V,
    navigator: &N,
    clock: &C,
) -> DashboardOutcome
where
    K: KeyValueStore,
    V: DashboardView + ?Sized,
    N: Navigator + ?Sized,
    C: Clock + ?Sized,
{
    let Some(user) = read_user(session) else {
        info!("no session; redirecting to login");
        navigator.navigate(Page::Login);
        return DashboardOutcome::Redirected;
    };
    if !view.has_greeting_target() {
        navigator.navigate(Page::Login);
        return DashboardOutcome::Redirected;
    }

    let text = greeting_for(clock.local_hour(), &user.name);
    view.show_greeting(&text);
    DashboardOutcome::Greeted(text)
}

fn read_user<K: KeyValueStore>(session: &SessionStore<K>) -> Option<SessionRecord> {
    match session.current() {
        Ok(user) => user,
        Err(e) => {
            warn!("ignoring unreadable session ({}): {e}", e.error_code());
            None
        }
    }
}
