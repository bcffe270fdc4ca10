//! Alert banners for error messages.
//!
//! Alerts are rendered inline (e.g., the "Failed to load transactions." banner
//! on the transactions page) or returned on their own as htmx fragments.

use maud::{Markup, html};

/// An error message with supporting details.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// The headline of the alert.
    message: String,
    /// Supporting text shown under the headline.
    details: String,
}

impl Alert {
    /// Create an error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Render the alert, with `action` placed after the details when given.
    pub fn into_html_with_action(self, action: Option<Markup>) -> Markup {
        html! {
            div
                class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50 dark:bg-gray-800 dark:text-red-400"
                role="alert"
                data-alert="error"
            {
                p class="font-medium" { (self.message) }

                @if !self.details.is_empty() {
                    p { (self.details) }
                }

                @if let Some(action) = action {
                    div class="mt-2" { (action) }
                }
            }
        }
    }

    /// Render the alert on its own.
    pub fn into_html(self) -> Markup {
        self.into_html_with_action(None)
    }
}
