//! The HTTP client that fetches transactions from the backend.
//!
//! The backend's response envelope varies by endpoint: a bare JSON array, or
//! an object wrapping the array under `data`, `transactions` or `items`. All
//! of these are normalised to a `Vec<Transaction>` here, so nothing past this
//! module needs to know about the wire format.

use std::time::Duration;

use reqwest::{
    Client as HttpClient, Url,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::Deserialize;
use time::{
    Date, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Iso8601,
    format_description::well_known::Rfc3339, macros::format_description,
};

use crate::{Error, session::Session};

use super::models::{Amount, Direction, Status, Transaction};

/// The path, relative to the backend URL, that lists transactions.
pub const TRANSACTIONS_PATH: &str = "transactions";

/// The timestamp used for transactions whose timestamp cannot be parsed.
///
/// Using a fixed sentinel keeps the timestamp sort a total order.
pub const UNPARSEABLE_TIMESTAMP_SENTINEL: OffsetDateTime = OffsetDateTime::UNIX_EPOCH;

// ============================================================================
// WIRE FORMAT
// ============================================================================

/// The accepted response envelopes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TransactionsResponse {
    List(Vec<RawTransaction>),
    Data { data: Vec<RawTransaction> },
    Transactions { transactions: Vec<RawTransaction> },
    Items { items: Vec<RawTransaction> },
}

impl TransactionsResponse {
    fn into_raw_transactions(self) -> Vec<RawTransaction> {
        match self {
            TransactionsResponse::List(transactions)
            | TransactionsResponse::Data { data: transactions }
            | TransactionsResponse::Transactions { transactions }
            | TransactionsResponse::Items {
                items: transactions,
            } => transactions,
        }
    }
}

/// Backends send IDs as either strings or numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(id) => id,
            RawId::Number(id) => id.to_string(),
        }
    }
}

/// Amounts are whole kobo, but some endpoints serialise them as floats.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Kobo(i64),
    Float(f64),
}

impl RawAmount {
    fn into_kobo(self) -> i64 {
        match self {
            RawAmount::Kobo(kobo) => kobo,
            RawAmount::Float(kobo) => kobo.round() as i64,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTransaction {
    id: RawId,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    amount: RawAmount,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    original_type: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

impl RawTransaction {
    fn into_transaction(self) -> Transaction {
        let raw_direction = self
            .original_type
            .filter(|original_type| !original_type.trim().is_empty())
            .or(self.kind)
            .unwrap_or_default();
        let id = self.id.into_string();
        let timestamp = match self.timestamp.as_deref() {
            Some(raw) => parse_timestamp(raw).unwrap_or_else(|| {
                tracing::warn!(
                    "transaction {id} has an unparseable timestamp {raw:?}, using the Unix epoch"
                );
                UNPARSEABLE_TIMESTAMP_SENTINEL
            }),
            None => {
                tracing::warn!("transaction {id} has no timestamp, using the Unix epoch");
                UNPARSEABLE_TIMESTAMP_SENTINEL
            }
        };

        Transaction::build(
            &id,
            Amount::from_kobo(self.amount.into_kobo()),
            Direction::classify(&raw_direction),
        )
        .description(self.description.as_deref().unwrap_or_default())
        .category(self.category.as_deref().unwrap_or_default())
        .timestamp(timestamp)
        .status(Status::parse(self.status.as_deref().unwrap_or_default()))
        .finalise()
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 timestamps, ISO-8601 date-times without an offset (read
/// as UTC), and plain `YYYY-MM-DD` dates (midnight UTC).
fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();

    if let Ok(timestamp) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(timestamp);
    }

    if let Ok(timestamp) = OffsetDateTime::parse(raw, &Iso8601::DEFAULT) {
        return Some(timestamp);
    }

    if let Ok(timestamp) = PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT) {
        return Some(timestamp.assume_utc());
    }

    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| date.midnight().assume_utc())
}

/// Parse a backend response body into transactions.
///
/// # Errors
/// Returns [Error::MalformedResponse] if the body is not one of the accepted
/// envelopes.
pub fn parse_transactions(body: &str) -> Result<Vec<Transaction>, Error> {
    let response: TransactionsResponse = serde_json::from_str(body)
        .map_err(|error| Error::MalformedResponse(error.to_string()))?;

    Ok(response
        .into_raw_transactions()
        .into_iter()
        .map(RawTransaction::into_transaction)
        .collect())
}

// ============================================================================
// CLIENT
// ============================================================================

/// Fetches transaction snapshots from the backend.
#[derive(Debug, Clone)]
pub struct TransactionClient {
    http_client: HttpClient,
    endpoint: Url,
    session: Session,
}

impl TransactionClient {
    /// Create a client for the backend at `backend_url`.
    ///
    /// # Errors
    /// Returns [Error::InvalidBackendUrl] if `backend_url` is not a valid URL,
    /// or [Error::HttpClientError] if the HTTP client cannot be built.
    pub fn new(backend_url: &str, session: Session, timeout: Duration) -> Result<Self, Error> {
        let endpoint = format!("{}/{TRANSACTIONS_PATH}", backend_url.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint)
            .inspect_err(|error| tracing::error!("could not parse backend URL: {error}"))
            .map_err(|_| Error::InvalidBackendUrl(backend_url.to_owned()))?;

        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| Error::HttpClientError(error.to_string()))?;

        Ok(Self {
            http_client,
            endpoint,
            session,
        })
    }

    /// The URL transactions are fetched from.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn create_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.api_token() {
            let auth_value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|error| Error::FetchFailure(format!("invalid API token: {error}")))?;
            headers.insert(AUTHORIZATION, auth_value);
        }

        Ok(headers)
    }

    /// GET the full list of transactions.
    ///
    /// # Errors
    /// Returns [Error::FetchFailure] if the backend is unreachable, times out
    /// or responds with a non-success status, and
    /// [Error::MalformedResponse] if the body is not an accepted envelope.
    pub async fn fetch_transactions(&self) -> Result<Vec<Transaction>, Error> {
        let response = self
            .http_client
            .get(self.endpoint.clone())
            .headers(self.create_headers()?)
            .send()
            .await
            .map_err(|error| Error::FetchFailure(format!("request failed: {error}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchFailure(format!(
                "backend responded with status {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|error| Error::FetchFailure(format!("could not read body: {error}")))?;

        let transactions = parse_transactions(&body)?;
        tracing::debug!(
            "fetched {} transactions from {}",
            transactions.len(),
            self.endpoint
        );

        Ok(transactions)
    }
}
