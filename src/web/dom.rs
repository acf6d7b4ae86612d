//! DOM-backed views and navigation.
//!
//! Element ids are fixed by the static pages. A missing element degrades to
//! a no-op (or an empty field value) rather than an error.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlInputElement};

use crate::pages::view::{DashboardView, FormView};
use crate::pages::{Navigator, Page};
use crate::util::validate::Credentials;

pub const SIGNUP_FORM_ID: &str = "signupForm";
pub const LOGIN_FORM_ID: &str = "loginForm";
pub const LOGOUT_BUTTON_ID: &str = "logout-button";
const ERROR_REGION_ID: &str = "error-message";
const GREETING_ID: &str = "user-greeting";
const SUBMIT_SELECTOR: &str = "form button[type=\"submit\"]";
const SPINNER_HTML: &str = r#"<div class="loading-spinner w-5 h-5 border-2 rounded-full mx-auto"></div>"#;

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn input_value(id: &str) -> String {
    document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Path of the current document, for [`Page::from_path`].
pub fn current_page() -> Page {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    Page::from_path(&path)
}

#[derive(Debug, Clone, Copy)]
struct FieldIds {
    name: Option<&'static str>,
    email: &'static str,
    password: &'static str,
}

/// A credential form on the current document.
#[derive(Debug, Clone, Copy)]
pub struct DomFormView {
    page: Page,
    fields: FieldIds,
}

impl DomFormView {
    #[must_use]
    pub fn signup(page: Page) -> Self {
        Self {
            page,
            fields: FieldIds { name: Some("signupName"), email: "signupEmail", password: "signupPassword" },
        }
    }

    #[must_use]
    pub fn login(page: Page) -> Self {
        Self { page, fields: FieldIds { name: None, email: "loginEmail", password: "loginPassword" } }
    }
}

impl FormView for DomFormView {
    fn credentials(&self) -> Credentials {
        Credentials {
            name: self.fields.name.map(input_value),
            email: input_value(self.fields.email),
            password: input_value(self.fields.password),
        }
    }

    fn clear_error(&self) {
        if let Some(region) = document().and_then(|d| d.get_element_by_id(ERROR_REGION_ID)) {
            region.set_inner_html("");
        }
    }

    fn show_error(&self, message: &str) {
        let Some(doc) = document() else { return };
        let Some(region) = doc.get_element_by_id(ERROR_REGION_ID) else { return };
        let Ok(line) = doc.create_element("div") else { return };
        line.set_class_name("error-message mb-6");
        // Text content, never HTML: messages may come from the server.
        line.set_text_content(Some(message));
        region.set_inner_html("");
        if let Err(e) = region.append_child(&line) {
            warn!("error region append failed: {e:?}");
        }
    }

    fn set_busy(&self, busy: bool) {
        let Some(button) = document()
            .and_then(|d| d.query_selector(SUBMIT_SELECTOR).ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        else {
            return;
        };
        button.set_disabled(busy);
        if busy {
            button.set_inner_html(SPINNER_HTML);
        } else if let Some(label) = self.page.submit_label() {
            button.set_text_content(Some(label));
        }
    }

    fn confirm(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

pub struct DomDashboardView;

impl DashboardView for DomDashboardView {
    fn has_greeting_target(&self) -> bool {
        document().and_then(|d| d.get_element_by_id(GREETING_ID)).is_some()
    }

    fn show_greeting(&self, text: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(GREETING_ID)) {
            el.set_text_content(Some(text));
        }
    }
}

/// Navigates by assigning `location.href` relative to the current page.
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, page: Page) {
        let Some(file) = page.file_name() else { return };
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(file) {
                warn!("navigation to {file} failed: {e:?}");
            }
        }
    }
}
