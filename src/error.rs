//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The message shown to users whenever transactions could not be loaded.
///
/// Network failures, server errors and malformed payloads all collapse to
/// this one message.
pub const LOAD_TRANSACTIONS_FAILED: &str = "Failed to load transactions.";

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The transaction backend was unreachable or returned a non-success status.
    ///
    /// The string holds the underlying cause and should only be logged.
    #[error("could not fetch transactions: {0}")]
    FetchFailure(String),

    /// The backend response did not match any of the accepted shapes.
    ///
    /// The string holds the deserialization error and should only be logged.
    #[error("the transactions response was malformed: {0}")]
    MalformedResponse(String),

    /// The backend URL given at start-up could not be parsed.
    #[error("invalid backend URL \"{0}\"")]
    InvalidBackendUrl(String),

    /// The HTTP client could not be created.
    #[error("could not create the HTTP client: {0}")]
    HttpClientError(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl Error {
    /// Whether the error came from loading transactions from the backend.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Error::FetchFailure(_) | Error::MalformedResponse(_))
    }

    /// The message that is safe to show to users.
    pub fn user_message(&self) -> String {
        match self {
            Error::FetchFailure(_) | Error::MalformedResponse(_) => {
                LOAD_TRANSACTIONS_FAILED.to_owned()
            }
            Error::InvalidTimezoneError(timezone) => format!(
                "Could not get local timezone \"{timezone}\". Check your server settings and \
                ensure the timezone has been set to valid, canonical timezone string"
            ),
            Error::NotFound => "The requested resource could not be found.".to_owned(),
            Error::InvalidBackendUrl(_) | Error::HttpClientError(_) => {
                "An unexpected error occurred, check the server logs for more details.".to_owned()
            }
        }
    }

    /// Render the error as an alert fragment for htmx requests.
    pub(crate) fn into_alert_response(self) -> Response {
        let (status, title) = match &self {
            Error::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            Error::FetchFailure(_) | Error::MalformedResponse(_) => {
                (StatusCode::BAD_GATEWAY, "Could not load transactions")
            }
            Error::InvalidTimezoneError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Invalid Timezone Settings")
            }
            Error::InvalidBackendUrl(_) | Error::HttpClientError(_) => {
                tracing::error!("An unexpected error occurred: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong")
            }
        };

        (status, Alert::error(title, &self.user_message()).into_html()).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::InvalidTimezoneError(ref timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::FetchFailure(_) | Error::MalformedResponse(_) => {
                tracing::error!("{}", self);
                InternalServerError {
                    description: LOAD_TRANSACTIONS_FAILED,
                    fix: "The transactions service may be unavailable. Try again later.",
                }
                .into_response()
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
