//! The wallet overview page: balance, totals and outbound spend per category.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState,
    alert::Alert,
    endpoints,
    html::{
        CARD_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, amount_class, balance_class, base,
        format_currency,
    },
    navigation::NavBar,
    session::Session,
    transaction::{Direction, Snapshot, Totals, TransactionFeed, summarize},
};

use super::breakdown::{CategorySpend, outbound_by_category};

/// The state needed for the wallet page.
#[derive(Debug, Clone)]
pub struct WalletViewState {
    feed: TransactionFeed,
    session: Session,
}

impl FromRef<AppState> for WalletViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            feed: state.feed.clone(),
            session: state.session.clone(),
        }
    }
}

/// Render the wallet overview.
pub async fn get_wallet_page(State(state): State<WalletViewState>) -> Response {
    let (snapshot, load_error) = match state.feed.refresh().await {
        Ok(snapshot) => (snapshot, None),
        Err(error) if error.is_load_failure() => {
            tracing::error!("could not load transactions: {error}");
            (Snapshot::default(), Some(error.user_message()))
        }
        Err(error) => return error.into_response(),
    };

    let totals = summarize(&snapshot.transactions);
    let breakdown = outbound_by_category(&snapshot.transactions);
    let nav_bar = NavBar::new(endpoints::WALLET_VIEW, state.session.username()).into_html();

    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full space-y-4 lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Wallet" }

                    a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE)
                    {
                        "View Transactions"
                    }
                }

                @if let Some(ref message) = load_error {
                    (load_error_view(message))
                }

                (balance_view(&totals, snapshot.transactions.len()))

                (breakdown_view(&breakdown))
            }
        }
    };

    base("Wallet", state.session.theme(), &content).into_response()
}

fn load_error_view(message: &str) -> Markup {
    let retry_link = html! {
        a href=(endpoints::WALLET_VIEW) class=(LINK_STYLE) data-retry="true" { "Retry" }
    };

    Alert::error(message, "").into_html_with_action(Some(retry_link))
}

fn balance_view(totals: &Totals, transaction_count: usize) -> Markup {
    html! {
        section class=(CARD_STYLE) data-wallet-balance="true"
        {
            p class="text-sm text-gray-500 dark:text-gray-400" { "Net Balance" }
            p class={ "text-3xl font-bold tabular-nums " (balance_class(totals.net_balance)) }
                data-summary="net"
            {
                (format_currency(totals.net_balance))
            }

            dl class="mt-4 grid grid-cols-3 gap-4 text-sm"
            {
                div
                {
                    dt class="text-gray-500 dark:text-gray-400" { "In" }
                    dd class={ "tabular-nums " (amount_class(Direction::Inbound)) } data-summary="inbound"
                    {
                        (format_currency(totals.total_inbound))
                    }
                }
                div
                {
                    dt class="text-gray-500 dark:text-gray-400" { "Out" }
                    dd class={ "tabular-nums " (amount_class(Direction::Outbound)) } data-summary="outbound"
                    {
                        (format_currency(totals.total_outbound))
                    }
                }
                div
                {
                    dt class="text-gray-500 dark:text-gray-400" { "Transactions" }
                    dd class="tabular-nums" data-summary="count" { (transaction_count) }
                }
            }
        }
    }
}

fn breakdown_view(breakdown: &[CategorySpend]) -> Markup {
    html! {
        section class=(CARD_STYLE)
        {
            h2 class="text-lg font-semibold mb-4" { "Spending by Category" }

            @if breakdown.is_empty() {
                p class="text-sm text-gray-500 dark:text-gray-400" data-empty-state="true"
                {
                    "No spending yet."
                }
            } @else {
                ul class="space-y-3"
                {
                    @for spend in breakdown {
                        li data-category-row="true" data-category=(spend.category)
                        {
                            div class="flex justify-between text-sm"
                            {
                                span class="flex items-center gap-2"
                                {
                                    span class={ "inline-flex h-3 w-3 rounded-full " (spend.colour) }
                                        data-category-colour=(spend.colour) {}
                                    (spend.category)
                                    span class="text-xs text-gray-500 dark:text-gray-400" data-count="true"
                                    {
                                        (spend.count) @if spend.count == 1 { " payment" } @else { " payments" }
                                    }
                                }
                                span class="tabular-nums"
                                {
                                    (format_currency(spend.total))
                                    span class="ml-2 text-gray-500 dark:text-gray-400" data-percent="true"
                                    {
                                        (spend.percent) "%"
                                    }
                                }
                            }
                            div class="mt-1 h-2 w-full rounded-full bg-gray-200 dark:bg-gray-700"
                            {
                                div class={ "h-2 rounded-full " (spend.colour) }
                                    style={ "width: " (spend.percent) "%" } {}
                            }
                        }
                    }
                }
            }
        }
    }
}
