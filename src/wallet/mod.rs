//! Wallet overview page
//!
//! Shows the wallet's totals and where outbound money went, broken down by category.

mod breakdown;
mod wallet_page;

pub use wallet_page::get_wallet_page;
