//! The per-process session: the backend API token, the user's display name and
//! the colour theme.
//!
//! The session is created once at start-up and handed to everything that needs
//! it through [crate::AppState]. Nothing reads these values from ambient
//! global state.

use std::fmt;

use clap::ValueEnum;

/// The colour theme for rendered pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    /// Always use the light theme.
    Light,
    /// Always use the dark theme.
    Dark,
    /// Follow the browser's preference.
    #[default]
    System,
}

impl Theme {
    /// The class to set on the root `<html>` element, if any.
    pub(crate) fn html_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => Some("light"),
            Theme::Dark => Some("dark"),
            Theme::System => None,
        }
    }
}

/// Session values shared by all requests.
#[derive(Clone, Default)]
pub struct Session {
    api_token: Option<String>,
    username: Option<String>,
    theme: Theme,
}

impl Session {
    /// Create a session.
    ///
    /// Empty strings are treated the same as missing values.
    pub fn new(api_token: Option<String>, username: Option<String>, theme: Theme) -> Self {
        Self {
            api_token: api_token.filter(|token| !token.trim().is_empty()),
            username: username.filter(|name| !name.trim().is_empty()),
            theme,
        }
    }

    /// The bearer token sent to the transactions backend.
    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    /// The name shown in the navigation bar.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The colour theme for rendered pages.
    pub fn theme(&self) -> Theme {
        self.theme
    }
}

// The API token must never end up in the logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("api_token", &self.api_token.as_ref().map(|_| "********"))
            .field("username", &self.username)
            .field("theme", &self.theme)
            .finish()
    }
}
