//! HTML rendering for the transactions page.

use maud::{Markup, html};
use time::{
    OffsetDateTime,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    alert::Alert,
    endpoints,
    html::{
        BADGE_STYLE, BUTTON_SECONDARY_STYLE, CARD_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, amount_class,
        balance_class, base, format_currency, format_directed_currency, loading_spinner,
    },
    pagination::{create_pagination_indicators, pagination_nav},
    session::Theme,
};

use super::{
    models::{Direction, Status, Transaction},
    query::{CategoryFilter, PageInfo, QueryCriteria, SortDirection, SortField, Totals, TypeFilter},
    source::UNPARSEABLE_TIMESTAMP_SENTINEL,
    transactions_page::TransactionsQuery,
};

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

/// The element swapped by htmx when filters, sorting or the page change.
const TRANSACTIONS_CONTENT_TARGET: &str = "#transactions-content";

/// The id of the element holding the filter form's sort inputs.
const SORT_STATE_ID: &str = "sort-state";

const TIMESTAMP_LABEL_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day] [month repr:short] [year], [hour]:[minute]");

/// A transaction and its timestamp in the local timezone.
pub(crate) struct TransactionRow<'a> {
    pub transaction: &'a Transaction,
    pub local_timestamp: OffsetDateTime,
}

/// Everything the transactions page shows.
pub(crate) struct TransactionsPageModel<'a> {
    /// The visible page of transactions.
    pub rows: Vec<TransactionRow<'a>>,
    /// Totals over every transaction in the snapshot.
    pub totals: Totals,
    pub page_info: PageInfo,
    /// The criteria the rows were selected with, after clamping the page.
    pub criteria: QueryCriteria,
    /// The categories offered in the category filter.
    pub categories: Vec<&'a str>,
    /// Set when the transactions could not be loaded.
    pub load_error: Option<String>,
    pub max_pages: usize,
}

pub(crate) fn transactions_view(
    model: &TransactionsPageModel,
    nav_bar: Markup,
    theme: Theme,
) -> Markup {
    let content = html! {
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full space-y-4 lg:max-w-5xl"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Transactions" }
                }

                (filter_form_view(&model.criteria, &model.categories))

                (transactions_content_view(model))
            }
        }
    };

    base("Transactions", theme, &content)
}

/// The part of the page that htmx swaps out: summary cards, the table and the
/// pagination bar.
fn transactions_content_view(model: &TransactionsPageModel) -> Markup {
    let route = endpoints::TRANSACTIONS_VIEW;
    let current_query = TransactionsQuery::from_criteria(&model.criteria);
    let current_url = current_query.to_url(route);
    let indicators = create_pagination_indicators(
        model.page_info.page,
        model.page_info.total_pages,
        model.max_pages,
    );

    html! {
        section
            id="transactions-content"
            class="space-y-4"
            hx-swap="outerHTML"
        {
            @if let Some(ref message) = model.load_error {
                (load_error_view(message, &current_url))
            }

            (summary_cards_view(&model.totals))

            (transactions_table_view(model))

            div class="flex flex-col items-center gap-2"
            {
                @if model.page_info.total_pages > 1 {
                    (pagination_nav(
                        &indicators,
                        |page| current_query.clone().with_page(page).to_url(route),
                        TRANSACTIONS_CONTENT_TARGET,
                    ))
                }

                (page_summary_view(&model.page_info, model.rows.len()))
            }
        }
    }
}

/// The response to an htmx request: the content section, plus the filter
/// form's sort inputs swapped out of band so later filter changes keep the
/// sort picked from a column header.
pub(crate) fn transactions_fragment_view(model: &TransactionsPageModel) -> Markup {
    html! {
        (transactions_content_view(model))
        (sort_state_view(&model.criteria, true))
    }
}

/// The hidden sort inputs of the filter form.
fn sort_state_view(criteria: &QueryCriteria, out_of_band: bool) -> Markup {
    html! {
        div id=(SORT_STATE_ID) hx-swap-oob=[out_of_band.then_some("true")]
        {
            input type="hidden" name="sort" value=(criteria.sort_field.as_query_value());
            input type="hidden" name="direction" value=(criteria.sort_direction.as_query_value());
        }
    }
}

fn load_error_view(message: &str, retry_url: &str) -> Markup {
    let retry_button = html! {
        button
            type="button"
            class=(BUTTON_SECONDARY_STYLE)
            hx-get=(retry_url)
            hx-target=(TRANSACTIONS_CONTENT_TARGET)
            hx-swap="outerHTML"
            data-retry="true"
        {
            "Retry"
        }
    };

    Alert::error(message, "").into_html_with_action(Some(retry_button))
}

fn summary_cards_view(totals: &Totals) -> Markup {
    html! {
        div class="grid grid-cols-1 gap-4 sm:grid-cols-3"
        {
            (summary_card(
                "Total Inbound",
                "inbound",
                &format_currency(totals.total_inbound),
                amount_class(Direction::Inbound),
            ))
            (summary_card(
                "Total Outbound",
                "outbound",
                &format_currency(totals.total_outbound),
                amount_class(Direction::Outbound),
            ))
            (summary_card(
                "Net Balance",
                "net",
                &format_currency(totals.net_balance),
                balance_class(totals.net_balance),
            ))
        }
    }
}

fn summary_card(label: &str, kind: &str, value: &str, value_class: &str) -> Markup {
    html! {
        div class=(CARD_STYLE) data-summary=(kind)
        {
            p class="text-sm text-gray-500 dark:text-gray-400" { (label) }
            p class={ "text-2xl font-semibold tabular-nums " (value_class) } data-summary-value="true"
            {
                (value)
            }
        }
    }
}

fn filter_form_view(criteria: &QueryCriteria, categories: &[&str]) -> Markup {
    let route = endpoints::TRANSACTIONS_VIEW;
    let type_options = [
        (TypeFilter::All, "All"),
        (TypeFilter::Inbound, "Inbound"),
        (TypeFilter::Outbound, "Outbound"),
    ];
    let selected_category = match &criteria.category_filter {
        CategoryFilter::All => None,
        CategoryFilter::Only(category) => Some(category.as_str()),
    };

    // The page is left out so that changing a filter goes back to the first page.
    html! {
        form
            method="get"
            action=(route)
            hx-get=(route)
            hx-target=(TRANSACTIONS_CONTENT_TARGET)
            hx-swap="outerHTML"
            hx-push-url="true"
            hx-trigger="change, submit"
            hx-indicator="#indicator"
            class="grid grid-cols-1 gap-4 sm:grid-cols-3"
            data-filter-form="true"
        {
            div
            {
                label for="search" class=(FORM_LABEL_STYLE) { "Search" }
                input
                    id="search"
                    type="search"
                    name="search"
                    value=(criteria.search_term)
                    placeholder="Description or category"
                    class=(FORM_TEXT_INPUT_STYLE)
                    hx-get=(route)
                    hx-include="closest form"
                    hx-target=(TRANSACTIONS_CONTENT_TARGET)
                    hx-swap="outerHTML"
                    hx-push-url="true"
                    hx-indicator="#indicator"
                    hx-trigger="keyup changed delay:300ms, search";
            }

            div
            {
                label for="type" class=(FORM_LABEL_STYLE) { "Type" }
                select id="type" name="type" class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for (filter, label) in type_options {
                        option value=(filter.as_query_value()) selected[criteria.type_filter == filter]
                        {
                            (label)
                        }
                    }
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                select id="category" name="category" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value=(CategoryFilter::All.as_query_value()) selected[selected_category.is_none()]
                    {
                        "All categories"
                    }

                    @for category in categories {
                        option value=(category) selected[selected_category == Some(*category)]
                        {
                            (category)
                        }
                    }
                }
            }

            (sort_state_view(criteria, false))

            span id="indicator" class="sm:col-span-3 text-sm text-gray-500 dark:text-gray-400"
            {
                span class="htmx-indicator" { (loading_spinner()) "Loading..." }
            }

            noscript
            {
                button type="submit" class=(BUTTON_SECONDARY_STYLE) { "Apply" }
            }
        }
    }
}

fn transactions_table_view(model: &TransactionsPageModel) -> Markup {
    let criteria = &model.criteria;

    html! {
        div class="overflow-x-auto rounded bg-gray-50 dark:bg-gray-800"
        {
            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        (sort_header("Date", SortField::Timestamp, criteria, ""))
                        (sort_header("Description", SortField::Description, criteria, ""))
                        (sort_header("Category", SortField::Category, criteria, ""))
                        (sort_header("Status", SortField::Status, criteria, ""))
                        (sort_header("Amount", SortField::Amount, criteria, "text-right"))
                    }
                }

                tbody
                {
                    @for row in &model.rows {
                        (transaction_row_view(row))
                    }

                    @if model.rows.is_empty() {
                        tr
                        {
                            td
                                colspan="5"
                                data-empty-state="true"
                                class="px-6 py-4 text-center"
                            {
                                (empty_message(model))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn empty_message(model: &TransactionsPageModel) -> &'static str {
    let criteria = &model.criteria;
    let is_filtered = !criteria.search_term.is_empty()
        || criteria.type_filter != TypeFilter::All
        || criteria.category_filter != CategoryFilter::All;

    if model.load_error.is_some() {
        "No transactions to show."
    } else if is_filtered {
        "No transactions match your filters."
    } else {
        "No transactions yet."
    }
}

/// The direction a column starts in when it is first clicked.
fn initial_direction(field: SortField) -> SortDirection {
    match field {
        SortField::Timestamp | SortField::Amount => SortDirection::Descending,
        SortField::Description | SortField::Category | SortField::Status => {
            SortDirection::Ascending
        }
    }
}

fn sort_header(label: &str, field: SortField, criteria: &QueryCriteria, align: &str) -> Markup {
    let is_active = criteria.sort_field == field;
    let next_direction = if is_active {
        criteria.sort_direction.reversed()
    } else {
        initial_direction(field)
    };
    let url = TransactionsQuery::from_criteria(criteria)
        .with_sort(field, next_direction)
        .to_url(endpoints::TRANSACTIONS_VIEW);
    let aria_sort = is_active.then(|| criteria.sort_direction.as_query_value());
    let arrow = match (is_active, criteria.sort_direction) {
        (false, _) => None,
        (true, SortDirection::Ascending) => Some("▲"),
        (true, SortDirection::Descending) => Some("▼"),
    };

    html! {
        th scope="col" class={ "px-6 py-3 " (align) } aria-sort=[aria_sort]
        {
            a
                href=(url)
                hx-get=(url)
                hx-target=(TRANSACTIONS_CONTENT_TARGET)
                hx-push-url="true"
                data-sort-field=(field.as_query_value())
                class="inline-flex items-center gap-1 hover:underline"
            {
                (label)
                @if let Some(arrow) = arrow {
                    span aria-hidden="true" { (arrow) }
                }
            }
        }
    }
}

fn transaction_row_view(row: &TransactionRow) -> Markup {
    let transaction = row.transaction;
    let (description, tooltip) = truncate_description(&transaction.description);

    html! {
        tr class=(TABLE_ROW_STYLE) data-transaction-row="true" data-transaction-id=(transaction.id)
        {
            td class={ (TABLE_CELL_STYLE) " whitespace-nowrap" }
            {
                (timestamp_view(transaction.timestamp, row.local_timestamp))
            }
            td class=(TABLE_CELL_STYLE) title=[tooltip] { (description) }
            td class=(TABLE_CELL_STYLE)
            {
                @if transaction.category.is_empty() {
                    span class="text-gray-400 dark:text-gray-500" { "-" }
                } @else {
                    (transaction.category)
                }
            }
            td class=(TABLE_CELL_STYLE) { (status_badge(&transaction.status)) }
            td
                class={ "px-6 py-4 text-right tabular-nums whitespace-nowrap " (amount_class(transaction.direction)) }
                data-amount="true"
                title=(transaction.direction.label())
            {
                (format_directed_currency(transaction.amount, transaction.direction))
            }
        }
    }
}

fn timestamp_view(timestamp: OffsetDateTime, local_timestamp: OffsetDateTime) -> Markup {
    if timestamp == UNPARSEABLE_TIMESTAMP_SENTINEL {
        return html! {
            span class="text-gray-400 dark:text-gray-500" data-unknown-timestamp="true"
            {
                "Unknown date"
            }
        };
    }

    let datetime = timestamp
        .format(&Rfc3339)
        .unwrap_or_else(|_| timestamp.to_string());
    let label = local_timestamp
        .format(TIMESTAMP_LABEL_FORMAT)
        .unwrap_or_else(|_| local_timestamp.to_string());

    html! {
        time datetime=(datetime) { (label) }
    }
}

fn status_badge(status: &Status) -> Markup {
    let (colour, label) = match status {
        Status::Success => (
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300",
            "Success",
        ),
        Status::Pending => (
            "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-300",
            "Pending",
        ),
        Status::Other(other) if other.is_empty() => (
            "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-300",
            "Unknown",
        ),
        Status::Other(other) => (
            "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-300",
            other.as_str(),
        ),
    };

    html! {
        span class={ (BADGE_STYLE) " " (colour) } data-status=(status.as_str()) { (label) }
    }
}

fn page_summary_view(page_info: &PageInfo, row_count: usize) -> Markup {
    let first = (page_info.page - 1) * page_info.page_size + 1;
    let last = first + row_count.saturating_sub(1);

    html! {
        p class="text-sm text-gray-500 dark:text-gray-400" data-page-summary="true"
        {
            @if row_count == 0 {
                "Showing 0 of 0 transactions"
            } @else {
                "Showing " (first) "-" (last) " of " (page_info.filtered_count) " transactions"
            }
        }
    }
}

/// Truncate `description` to [MAX_DESCRIPTION_GRAPHEMES], returning the
/// displayed text and, when truncated, the full text for a tooltip.
fn truncate_description(description: &str) -> (String, Option<&str>) {
    if description.graphemes(true).count() <= MAX_DESCRIPTION_GRAPHEMES {
        return (description.to_owned(), None);
    }

    let mut truncated: String = description
        .graphemes(true)
        .take(MAX_DESCRIPTION_GRAPHEMES - 3)
        .collect();
    truncated.push_str("...");

    (truncated, Some(description))
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::transaction::Status;

    use super::{MAX_DESCRIPTION_GRAPHEMES, status_badge, truncate_description};

    #[test]
    fn short_description_is_unchanged() {
        let (got, tooltip) = truncate_description("Suya");

        assert_eq!(got, "Suya");
        assert_eq!(tooltip, None);
    }

    #[test]
    fn long_description_is_truncated_on_graphemes() {
        let description = "🇳🇬".repeat(MAX_DESCRIPTION_GRAPHEMES + 1);

        let (got, tooltip) = truncate_description(&description);

        assert_eq!(got, format!("{}...", "🇳🇬".repeat(MAX_DESCRIPTION_GRAPHEMES - 3)));
        assert_eq!(tooltip, Some(description.as_str()));
    }

    #[test]
    fn status_badges_carry_raw_status() {
        let cases = [
            (Status::Success, "success", "Success"),
            (Status::Pending, "pending", "Pending"),
            (Status::Other("reversed".to_owned()), "reversed", "reversed"),
        ];
        let selector = Selector::parse("span[data-status]").unwrap();

        for (status, want_attr, want_text) in cases {
            let html = Html::parse_fragment(&status_badge(&status).into_string());
            let badge = html.select(&selector).next().unwrap();

            assert_eq!(badge.value().attr("data-status"), Some(want_attr));
            assert_eq!(badge.text().collect::<String>(), want_text);
        }
    }
}
