//! Transactions fetched from the backend and the pages that display them.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the `Amount`, `Direction` and `Status` types
//! - The HTTP client and the sequence-numbered snapshot feed
//! - The query engine that filters, sorts, paginates and totals a snapshot
//! - View handlers for the transactions page and JSON API

mod feed;
mod models;
mod query;
mod source;
mod transactions_page;
mod view;

pub use feed::{Snapshot, TransactionFeed};
pub use models::{Amount, Direction, Status, Transaction};
pub use query::{
    CategoryFilter, DEFAULT_PAGE_SIZE, QueryCriteria, QueryResult, SortDirection, SortField,
    Totals, TypeFilter, run_query, summarize,
};
#[cfg(test)]
pub(crate) use source::TRANSACTIONS_PATH;
pub use source::{TransactionClient, parse_transactions};
pub use transactions_page::{get_transactions_api, get_transactions_page};
