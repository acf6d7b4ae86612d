//! Logout control.

use log::{info, warn};

use super::{Navigator, Page};
use crate::error::ErrorCode;
use crate::state::session::{KeyValueStore, SessionStore, StorageError};

/// Clear the session record and go to the login page. No request is made.
///
/// Navigation happens even when clearing fails, so the user always lands on
/// the login form.
///
/// # Errors
///
/// Returns the [`StorageError`] raised while clearing, after navigating.
pub fn logout<K, N>(session: &SessionStore<K>, navigator: &N) -> Result<(), StorageError>
where
    K: KeyValueStore,
    N: Navigator + ?Sized,
{
    let cleared = session.clear();
    match &cleared {
        Ok(()) => info!("session cleared"),
        Err(e) => warn!("session clear failed ({}): {e}", e.error_code()),
    }
    navigator.navigate(Page::Login);
    cleared
}
