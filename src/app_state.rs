//! Implements a struct that holds the state of the server.

use std::time::Duration;

use crate::{
    Error,
    pagination::PaginationConfig,
    session::Session,
    timezone::validate_timezone,
    transaction::{TransactionClient, TransactionFeed},
};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The source of transaction snapshots.
    pub feed: TransactionFeed,

    /// The API token, display name and theme.
    pub session: Session,

    /// The local timezone as a canonical timezone name, e.g. "Africa/Lagos".
    pub local_timezone: String,

    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
}

impl AppState {
    /// Create a new [AppState] that reads transactions from `backend_url`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Africa/Lagos".
    ///
    /// # Errors
    /// Returns an error if `backend_url` is not a valid URL, the HTTP client
    /// cannot be built, or `local_timezone` is not a known timezone.
    pub fn new(
        backend_url: &str,
        session: Session,
        local_timezone: &str,
        pagination_config: PaginationConfig,
        request_timeout: Duration,
    ) -> Result<Self, Error> {
        validate_timezone(local_timezone)?;

        let client = TransactionClient::new(backend_url, session.clone(), request_timeout)?;

        Ok(Self {
            feed: TransactionFeed::new(client),
            session,
            local_timezone: local_timezone.to_owned(),
            pagination_config,
        })
    }
}
