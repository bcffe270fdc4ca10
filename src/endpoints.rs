//! The endpoint URIs.

/// The root route which redirects to the transactions page.
pub const ROOT: &str = "/";
/// The page for displaying, filtering and sorting the user's transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The page for the wallet overview.
pub const WALLET_VIEW: &str = "/wallet";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";
/// The route for querying transactions as JSON.
pub const TRANSACTIONS_API: &str = "/api/transactions";
