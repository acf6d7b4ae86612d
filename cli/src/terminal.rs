//! Terminal implementations of the view and navigator seams.

use std::cell::Cell;

use portal::pages::view::{DashboardView, FormView};
use portal::pages::{Navigator, Page};
use portal::util::validate::Credentials;

/// A "form" whose fields came from command-line flags.
pub struct TerminalForm {
    page: Page,
    credentials: Credentials,
}

impl TerminalForm {
    pub fn new(page: Page, credentials: Credentials) -> Self {
        Self { page, credentials }
    }
}

impl FormView for TerminalForm {
    fn credentials(&self) -> Credentials {
        self.credentials.clone()
    }

    fn clear_error(&self) {}

    fn show_error(&self, message: &str) {
        eprintln!("error: {message}");
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            eprintln!("submitting...");
        } else if let Some(label) = self.page.submit_label() {
            tracing::debug!(label, "form idle");
        }
    }

    fn confirm(&self, message: &str) {
        println!("{message}");
    }
}

pub struct TerminalDashboard;

impl DashboardView for TerminalDashboard {
    fn has_greeting_target(&self) -> bool {
        true
    }

    fn show_greeting(&self, text: &str) {
        println!("{text}");
    }
}

/// Remembers where the flow would go next and tells the user.
#[derive(Default)]
pub struct TerminalNavigator {
    last: Cell<Option<Page>>,
}

impl TerminalNavigator {
    pub fn last(&self) -> Option<Page> {
        self.last.get()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, page: Page) {
        self.last.set(Some(page));
        if let Some(file) = page.file_name() {
            eprintln!("-> {file}");
        }
    }
}
