//! Keeps the latest transaction snapshot and discards out-of-order responses.
//!
//! Every fetch is tagged with a sequence number when it starts. A response
//! only replaces the shared snapshot if it was started after the snapshot it
//! replaces, so a slow, older request can never overwrite newer data.

use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicU64, Ordering},
};

use crate::Error;

use super::{models::Transaction, source::TransactionClient};

/// An immutable list of transactions and the fetch it came from.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The sequence number of the fetch that produced this snapshot.
    ///
    /// Zero means no fetch has completed yet.
    pub sequence: u64,
    /// The transactions, shared between all readers of the snapshot.
    pub transactions: Arc<[Transaction]>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            sequence: 0,
            transactions: Arc::from(Vec::new()),
        }
    }
}

/// A ticket handed out when a fetch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct FetchTicket(u64);

/// The source of transaction snapshots for all request handlers.
#[derive(Debug, Clone)]
pub struct TransactionFeed {
    client: TransactionClient,
    next_sequence: Arc<AtomicU64>,
    latest: Arc<Mutex<Snapshot>>,
}

impl TransactionFeed {
    /// Create a feed that fetches through `client`.
    pub fn new(client: TransactionClient) -> Self {
        Self {
            client,
            next_sequence: Arc::new(AtomicU64::new(1)),
            latest: Arc::new(Mutex::new(Snapshot::default())),
        }
    }

    /// Fetch a fresh snapshot from the backend.
    ///
    /// Returns the latest installed snapshot, which is the one just fetched
    /// unless a newer fetch finished first.
    ///
    /// # Errors
    /// Returns the fetch error unchanged. The installed snapshot is left as is.
    pub async fn refresh(&self) -> Result<Snapshot, Error> {
        let ticket = self.begin();
        let transactions = self
            .client
            .fetch_transactions()
            .await
            .inspect_err(|error| tracing::warn!("fetch #{} failed: {error}", ticket.0))?;

        Ok(self.install(ticket, transactions))
    }

    /// The most recently installed snapshot, without fetching.
    pub fn latest(&self) -> Snapshot {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn begin(&self) -> FetchTicket {
        FetchTicket(self.next_sequence.fetch_add(1, Ordering::SeqCst))
    }

    pub(crate) fn install(&self, ticket: FetchTicket, transactions: Vec<Transaction>) -> Snapshot {
        // Assigning a whole snapshot cannot leave it half-written, so a
        // poisoned lock still holds a consistent value.
        let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);

        if ticket.0 > latest.sequence {
            *latest = Snapshot {
                sequence: ticket.0,
                transactions: Arc::from(transactions),
            };
        } else {
            tracing::debug!(
                "discarding response for fetch #{}, fetch #{} is newer",
                ticket.0,
                latest.sequence
            );
        }

        latest.clone()
    }
}
