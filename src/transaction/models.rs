//! Defines the core data models for transactions.
//!
//! Transactions are owned by the backend. The client only ever holds an
//! immutable snapshot, so nothing in here is mutated after construction.

use std::{
    fmt,
    iter::Sum,
    ops::{Add, Sub},
};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Serialize, Serializer};
use time::OffsetDateTime;

/// The opaque ID the backend assigns to a transaction.
pub type TransactionId = String;

/// Raw direction strings that mark money flowing into the wallet.
const INBOUND_MARKERS: [&str; 3] = ["DEPOSIT", "INCOME", "CREDIT"];

/// Raw direction strings the backend is known to send for outgoing money.
///
/// Anything that is not inbound is outbound, whether it matches one of these
/// or not.
const OUTBOUND_MARKERS: [&str; 3] = ["EXPENSE", "WITHDRAWAL", "DEBIT"];

// ============================================================================
// AMOUNT
// ============================================================================

/// An amount of money in naira.
///
/// The backend sends amounts in kobo (1/100 naira). The conversion happens
/// exactly once, in [Amount::from_kobo], and the stored decimal is exact, so
/// [Amount::kobo] always gives back the original subunit value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero naira.
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Convert an amount in kobo into naira.
    pub fn from_kobo(kobo: i64) -> Self {
        Self(Decimal::new(kobo, 2))
    }

    /// The amount in kobo.
    pub fn kobo(self) -> i64 {
        let kobo = (self.0 * Decimal::ONE_HUNDRED).trunc();

        kobo.to_i64().unwrap_or(if kobo.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
    }

    /// The amount in naira as an exact decimal.
    pub fn naira(self) -> Decimal {
        self.0
    }

    /// Whether the amount is below zero.
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// The absolute value of the amount.
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ============================================================================
// DIRECTION AND STATUS
// ============================================================================

/// Whether money came into or went out of the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Deposits, income and credits.
    Inbound,
    /// Expenses, withdrawals and debits.
    Outbound,
}

impl Direction {
    /// Classify a raw direction string from the backend.
    ///
    /// The string is uppercased and searched for the known markers. Strings
    /// that match none of them, including the empty string, are treated as
    /// outbound so unknown transactions count as spending rather than income.
    pub fn classify(raw: &str) -> Self {
        let raw = raw.to_uppercase();

        if INBOUND_MARKERS.iter().any(|marker| raw.contains(marker)) {
            Direction::Inbound
        } else {
            if !OUTBOUND_MARKERS.iter().any(|marker| raw.contains(marker)) {
                tracing::debug!("unrecognised transaction type {raw:?}, treating it as outbound");
            }

            Direction::Outbound
        }
    }

    /// The label shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Inbound => "Inbound",
            Direction::Outbound => "Outbound",
        }
    }
}

/// The settlement status of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    /// The transaction has settled.
    Success,
    /// The transaction is waiting to settle.
    Pending,
    /// Any other status string, kept verbatim.
    Other(String),
}

impl Status {
    /// Parse the free-text status from the backend, ignoring case.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "success" => Status::Success,
            "pending" => Status::Pending,
            _ => Status::Other(raw.to_owned()),
        }
    }

    /// The lowercase status, or the backend's text for other statuses.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Success => "success",
            Status::Pending => "pending",
            Status::Other(status) => status,
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TRANSACTION
// ============================================================================

/// An event where money either entered or left the wallet.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The category label, an opaque string from the backend.
    pub category: String,
    /// The amount of money moved, always non-negative.
    pub amount: Amount,
    /// When the transaction happened.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Whether the money came in or went out.
    pub direction: Direction,
    /// The settlement status.
    pub status: Status,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(id: &str, amount: Amount, direction: Direction) -> TransactionBuilder {
        TransactionBuilder {
            id: id.to_owned(),
            amount,
            direction,
            description: String::new(),
            category: String::new(),
            timestamp: OffsetDateTime::UNIX_EPOCH,
            status: Status::Success,
        }
    }

    /// The transaction time as milliseconds since the Unix epoch.
    pub fn epoch_millis(&self) -> i128 {
        self.timestamp.unix_timestamp_nanos() / 1_000_000
    }
}

/// A builder for creating [Transaction] instances.
///
/// Optional fields default to an empty description and category, the Unix
/// epoch as the timestamp, and a successful status.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    id: TransactionId,
    amount: Amount,
    direction: Direction,
    description: String,
    category: String,
    timestamp: OffsetDateTime,
    status: Status,
}

impl TransactionBuilder {
    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Set the category label for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    /// Set when the transaction happened.
    pub fn timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the settlement status.
    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Build the final [Transaction].
    pub fn finalise(self) -> Transaction {
        Transaction {
            id: self.id,
            description: self.description,
            category: self.category,
            amount: self.amount.abs(),
            timestamp: self.timestamp,
            direction: self.direction,
            status: self.status,
        }
    }
}
