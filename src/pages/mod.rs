//! Page controllers and the routing they navigate between.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each controller orchestrates validation, the retrying client, session
//! storage and the host view. Hosts (browser DOM, terminal) implement the
//! `view` traits and [`Navigator`]; controllers never touch the host
//! directly.

pub mod dashboard;
pub mod form;
pub mod login;
pub mod logout;
pub mod signup;
pub mod view;


/// The four documents of the flow, keyed by file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Signup,
    Login,
    Dashboard,
    Other,
}

impl Page {
    /// Classify a URL path by its last segment. An empty segment is the
    /// site root, which serves the signup form.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path.rsplit('/').next().unwrap_or_default() {
            "" | "signup.html" => Self::Signup,
            "login.html" => Self::Login,
            "dashboard.html" => Self::Dashboard,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            Self::Signup => Some("signup.html"),
            Self::Login => Some("login.html"),
            Self::Dashboard => Some("dashboard.html"),
            Self::Other => None,
        }
    }

    /// Idle label of the page's submit control, if it has one.
    #[must_use]
    pub fn submit_label(self) -> Option<&'static str> {
        match self {
            Self::Signup => Some("Sign Up"),
            Self::Login => Some("Log In"),
            Self::Dashboard | Self::Other => None,
        }
    }
}

/// Moves the host to another page.
pub trait Navigator {
    fn navigate(&self, page: Page);
}
