//! Page-load wiring.
//!
//! The dashboard is initialised first (it may redirect), then handlers are
//! attached to whichever of the signup form, login form and logout button
//! exist on the page.

use std::future::Future;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::dom::{
    DomDashboardView, DomFormView, LOGIN_FORM_ID, LOGOUT_BUTTON_ID, LocationNavigator, SIGNUP_FORM_ID, current_page,
};
use super::storage::BrowserSessionStorage;
use crate::config::PortalConfig;
use crate::net::client::RetryingClient;
use crate::net::transport::{FetchTransport, TimerSleeper};
use crate::pages::Page;
use crate::pages::dashboard::initialize_dashboard;
use crate::pages::login::LoginController;
use crate::pages::logout::logout;
use crate::pages::signup::SignupController;
use crate::state::session::SessionStore;
use crate::util::greeting::LocalClock;

type BrowserClient = RetryingClient<FetchTransport, TimerSleeper>;

/// Wire the current page. Called once from the wasm start hook.
pub fn on_load() {
    let page = current_page();
    debug!("booting {page:?}");

    // Handlers outlive this call and live exactly as long as the page.
    let client: &'static BrowserClient = Box::leak(Box::new(RetryingClient::from_config(
        FetchTransport,
        TimerSleeper,
        &PortalConfig::compiled(),
    )));
    let session: &'static SessionStore<BrowserSessionStorage> =
        Box::leak(Box::new(SessionStore::new(BrowserSessionStorage)));

    if page == Page::Dashboard {
        initialize_dashboard(session, &DomDashboardView, &LocationNavigator, &LocalClock);
    }

    let signup: &'static SignupController<'static, FetchTransport, TimerSleeper> =
        Box::leak(Box::new(SignupController::new(client)));
    listen(SIGNUP_FORM_ID, "submit", true, move || async move {
        let _ = signup.submit(&DomFormView::signup(page), &LocationNavigator).await;
    });

    let login: &'static LoginController<'static, FetchTransport, TimerSleeper, BrowserSessionStorage> =
        Box::leak(Box::new(LoginController::new(client, session)));
    listen(LOGIN_FORM_ID, "submit", true, move || async move {
        let _ = login.submit(&DomFormView::login(page), &LocationNavigator).await;
    });

    listen(LOGOUT_BUTTON_ID, "click", false, move || async move {
        let _ = logout(session, &LocationNavigator);
    });
}

/// Attach `handler` to `event` on the element with `id`, if present.
fn listen<F, Fut>(id: &str, event: &str, prevent_default: bool, handler: F)
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        if prevent_default {
            ev.prevent_default();
        }
        wasm_bindgen_futures::spawn_local(handler());
    });
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        warn!("could not attach {event} on #{id}: {e:?}");
    }
    closure.forget();
}
