//! The transaction query engine: filter, sort, paginate and summarise a
//! transaction snapshot.
//!
//! Everything in here is pure and synchronous. The same snapshot and criteria
//! always produce the same result.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use super::models::{Amount, Direction, Transaction};

/// The number of transactions shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

// ============================================================================
// CRITERIA
// ============================================================================

/// Restricts the visible transactions by direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    /// Show both directions.
    #[default]
    All,
    /// Show only money coming in.
    Inbound,
    /// Show only money going out.
    Outbound,
}

impl TypeFilter {
    fn matches(self, direction: Direction) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Inbound => direction == Direction::Inbound,
            TypeFilter::Outbound => direction == Direction::Outbound,
        }
    }

    /// The value used in URL query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Inbound => "inbound",
            TypeFilter::Outbound => "outbound",
        }
    }
}

/// Restricts the visible transactions to a single category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Show every category.
    #[default]
    All,
    /// Show only transactions whose category is exactly this string.
    Only(String),
}

impl CategoryFilter {
    /// Parse a query string value, where "all" or an empty value means no filter.
    pub fn from_query_value(value: &str) -> Self {
        if value.is_empty() || value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_owned())
        }
    }

    /// The value used in URL query strings.
    pub fn as_query_value(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category,
        }
    }

    fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// The field transactions are ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// When the transaction happened.
    #[default]
    Timestamp,
    /// The description, ignoring case.
    Description,
    /// The category label, ignoring case.
    Category,
    /// The amount in kobo.
    Amount,
    /// The settlement status, ignoring case.
    Status,
}

impl SortField {
    /// The value used in URL query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortField::Timestamp => "timestamp",
            SortField::Description => "description",
            SortField::Category => "category",
            SortField::Amount => "amount",
            SortField::Status => "status",
        }
    }

    fn key(self, transaction: &Transaction) -> SortKey {
        match self {
            SortField::Timestamp => SortKey::Number(transaction.epoch_millis()),
            SortField::Amount => SortKey::Number(i128::from(transaction.amount.kobo())),
            SortField::Description => SortKey::Text(transaction.description.to_lowercase()),
            SortField::Category => SortKey::Text(transaction.category.to_lowercase()),
            SortField::Status => SortKey::Text(transaction.status.as_str().to_lowercase()),
        }
    }
}

/// A sort key. All keys produced for one sort share the same variant.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Number(i128),
    Text(String),
}

/// The order of the sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest, earliest or alphabetically first at the top.
    Ascending,
    /// Largest, latest or alphabetically last at the top.
    #[default]
    Descending,
}

impl SortDirection {
    /// The value used in URL query strings.
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The user's filter, sort and page selection for a single page view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCriteria {
    /// Case-insensitive substring matched against description and category.
    pub search_term: String,
    /// Restricts transactions by direction.
    pub type_filter: TypeFilter,
    /// Restricts transactions to one category.
    pub category_filter: CategoryFilter,
    /// The field to sort by.
    pub sort_field: SortField,
    /// The sort order.
    pub sort_direction: SortDirection,
    /// The requested page, starting at 1.
    pub page: usize,
    /// The number of transactions per page.
    pub page_size: usize,
}

impl Default for QueryCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            type_filter: TypeFilter::default(),
            category_filter: CategoryFilter::default(),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// ============================================================================
// RESULTS
// ============================================================================

/// Totals over the whole snapshot, independent of any filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// The sum of all inbound amounts.
    pub total_inbound: Amount,
    /// The sum of all outbound amounts.
    pub total_outbound: Amount,
    /// Inbound minus outbound.
    pub net_balance: Amount,
}

/// Where the visible page sits within the filtered transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// The page shown, after clamping into range.
    pub page: usize,
    /// The number of transactions per page.
    pub page_size: usize,
    /// The number of pages, zero when nothing matched.
    pub total_pages: usize,
    /// The number of transactions that matched the filters.
    pub filtered_count: usize,
}

/// The output of [run_query].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult<'a> {
    /// The visible page of transactions, in sort order.
    pub transactions: Vec<&'a Transaction>,
    /// Totals over the whole snapshot.
    pub totals: Totals,
    /// Pagination metadata for the visible page.
    pub page_info: PageInfo,
}

// ============================================================================
// ENGINE
// ============================================================================

/// Whether `transaction` satisfies every filter in `criteria`.
pub fn matches(transaction: &Transaction, criteria: &QueryCriteria) -> bool {
    matches_search(transaction, &criteria.search_term)
        && criteria.type_filter.matches(transaction.direction)
        && criteria.category_filter.matches(&transaction.category)
}

fn matches_search(transaction: &Transaction, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }

    let search_term = search_term.to_lowercase();

    transaction.description.to_lowercase().contains(&search_term)
        || transaction.category.to_lowercase().contains(&search_term)
}

/// The transactions that satisfy every filter in `criteria`, in their original order.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    criteria: &QueryCriteria,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|transaction| matches(transaction, criteria))
        .collect()
}

/// Sort `transactions` in place by `field`.
///
/// The sort is stable: transactions with equal keys keep their relative
/// order in both directions.
pub fn sort_transactions(
    transactions: &mut [&Transaction],
    field: SortField,
    direction: SortDirection,
) {
    match direction {
        SortDirection::Ascending => transactions.sort_by_cached_key(|t| field.key(t)),
        SortDirection::Descending => transactions.sort_by_cached_key(|t| Reverse(field.key(t))),
    }
}

/// Sum inbound and outbound amounts over all `transactions`.
pub fn summarize(transactions: &[Transaction]) -> Totals {
    let (total_inbound, total_outbound) = transactions.iter().fold(
        (Amount::ZERO, Amount::ZERO),
        |(inbound, outbound), transaction| match transaction.direction {
            Direction::Inbound => (inbound + transaction.amount, outbound),
            Direction::Outbound => (inbound, outbound + transaction.amount),
        },
    );

    Totals {
        total_inbound,
        total_outbound,
        net_balance: total_inbound - total_outbound,
    }
}

/// The number of pages needed to show `item_count` items.
///
/// A `page_size` of zero is treated as one.
pub fn page_count(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1))
}

/// Select the requested page of `items`.
///
/// Pages start at 1. A page past the end is clamped to the last page, and
/// page 0 is treated as page 1. When `items` is empty the result is page 1
/// of 0 with no items.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> (PageInfo, &[T]) {
    let page_size = page_size.max(1);
    let total_pages = page_count(items.len(), page_size);
    let page = page.clamp(1, total_pages.max(1));

    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    let page_info = PageInfo {
        page,
        page_size,
        total_pages,
        filtered_count: items.len(),
    };

    (page_info, &items[start..end])
}

/// Run the full pipeline: filter, sort, paginate, and total the whole snapshot.
pub fn run_query<'a>(transactions: &'a [Transaction], criteria: &QueryCriteria) -> QueryResult<'a> {
    let mut filtered = filter_transactions(transactions, criteria);
    sort_transactions(&mut filtered, criteria.sort_field, criteria.sort_direction);

    let (page_info, visible) = paginate(&filtered, criteria.page, criteria.page_size);

    if page_info.page != criteria.page {
        tracing::debug!(
            "requested page {} is out of range, showing page {} of {}",
            criteria.page,
            page_info.page,
            page_info.total_pages
        );
    }

    QueryResult {
        transactions: visible.to_vec(),
        totals: summarize(transactions),
        page_info,
    }
}

/// The distinct, non-empty categories in `transactions`, sorted.
pub fn distinct_categories(transactions: &[Transaction]) -> Vec<&str> {
    let mut categories: Vec<&str> = transactions
        .iter()
        .map(|transaction| transaction.category.as_str())
        .filter(|category| !category.is_empty())
        .collect();

    categories.sort_unstable();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use time::{Duration, macros::datetime};

    use crate::{
        test_utils::{inbound, outbound, sample_transactions},
        transaction::{Amount, Direction, Status, Transaction, parse_transactions},
    };

    use super::{
        CategoryFilter, DEFAULT_PAGE_SIZE, QueryCriteria, SortDirection, SortField, TypeFilter,
        distinct_categories, filter_transactions, matches, paginate, run_query, sort_transactions,
        summarize,
    };

    /// Compare two transactions by `field`, ignoring direction.
    fn compare_by(field: SortField, a: &Transaction, b: &Transaction) -> Ordering {
        field.key(a).cmp(&field.key(b))
    }

    fn ids(transactions: &[&Transaction]) -> Vec<String> {
        transactions
            .iter()
            .map(|transaction| transaction.id.clone())
            .collect()
    }

    fn criteria() -> QueryCriteria {
        QueryCriteria::default()
    }

    #[test]
    fn default_criteria_sorts_latest_first() {
        let transactions = sample_transactions();

        let got = run_query(&transactions, &criteria());

        assert_eq!(ids(&got.transactions), ["6", "5", "4", "3", "2", "1"]);
        assert_eq!(got.page_info.page, 1);
        assert_eq!(got.page_info.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(got.page_info.total_pages, 1);
        assert_eq!(got.page_info.filtered_count, 6);
    }

    #[test]
    fn unparseable_timestamp_sorts_last_by_default() {
        let body = r#"[
            {"id": "broken", "amount": 100, "type": "EXPENSE", "timestamp": "yesterday-ish"},
            {"id": "old", "amount": 100, "type": "EXPENSE", "timestamp": "2001-01-01T00:00:00Z"},
            {"id": "new", "amount": 100, "type": "EXPENSE", "timestamp": "2025-10-01T12:00:00Z"}
        ]"#;
        let transactions = parse_transactions(body).unwrap();

        let latest_first = run_query(&transactions, &criteria());
        let oldest_first = run_query(
            &transactions,
            &QueryCriteria {
                sort_direction: SortDirection::Ascending,
                ..criteria()
            },
        );

        assert_eq!(ids(&latest_first.transactions), ["new", "old", "broken"]);
        assert_eq!(ids(&oldest_first.transactions), ["broken", "old", "new"]);
    }

    #[test]
    fn totals_over_mixed_types() {
        let transactions = [
            inbound("deposit", 100_000),
            outbound("expense", 30_000),
            outbound("withdrawal", 20_000),
        ];

        let got = summarize(&transactions);

        assert_eq!(got.total_inbound.kobo(), 100_000);
        assert_eq!(got.total_outbound.kobo(), 50_000);
        assert_eq!(got.net_balance.kobo(), 50_000);
    }

    #[test]
    fn net_balance_can_be_negative() {
        let transactions = [inbound("in", 1_000), outbound("out", 4_000)];

        let got = summarize(&transactions);

        assert_eq!(got.net_balance.kobo(), -3_000);
    }

    #[test]
    fn totals_ignore_filters() {
        let transactions = sample_transactions();
        let unfiltered = run_query(&transactions, &criteria()).totals;

        let filtered_criteria = [
            QueryCriteria {
                search_term: "suya".to_owned(),
                ..criteria()
            },
            QueryCriteria {
                type_filter: TypeFilter::Inbound,
                ..criteria()
            },
            QueryCriteria {
                category_filter: CategoryFilter::Only("Food".to_owned()),
                ..criteria()
            },
            QueryCriteria {
                search_term: "no such transaction".to_owned(),
                type_filter: TypeFilter::Outbound,
                ..criteria()
            },
        ];

        for criteria in filtered_criteria {
            let got = run_query(&transactions, &criteria).totals;
            assert_eq!(got, unfiltered, "totals changed for {criteria:?}");
        }

        assert_eq!(unfiltered.total_inbound.kobo(), 520_000);
        assert_eq!(unfiltered.total_outbound.kobo(), 221_000);
        assert_eq!(unfiltered.net_balance.kobo(), 299_000);
    }

    #[test]
    fn search_matches_description_or_category_ignoring_case() {
        let transactions = [
            Transaction::build("a", Amount::from_kobo(1), Direction::Outbound)
                .description("Apartment Rent - Lagos")
                .category("Housing")
                .finalise(),
            Transaction::build("b", Amount::from_kobo(1), Direction::Outbound)
                .description("Landlord transfer")
                .category("Rent")
                .finalise(),
            Transaction::build("c", Amount::from_kobo(1), Direction::Outbound)
                .description("Groceries")
                .category("Food")
                .finalise(),
        ];
        let criteria = QueryCriteria {
            search_term: "rent".to_owned(),
            ..criteria()
        };

        let got = filter_transactions(&transactions, &criteria);

        assert_eq!(ids(&got), ["a", "b"]);
    }

    #[test]
    fn type_filter_uses_direction() {
        let transactions = sample_transactions();

        let inbound_only = filter_transactions(
            &transactions,
            &QueryCriteria {
                type_filter: TypeFilter::Inbound,
                ..criteria()
            },
        );
        let outbound_only = filter_transactions(
            &transactions,
            &QueryCriteria {
                type_filter: TypeFilter::Outbound,
                ..criteria()
            },
        );

        assert_eq!(ids(&inbound_only), ["1", "5"]);
        assert_eq!(ids(&outbound_only), ["2", "3", "4", "6"]);
    }

    #[test]
    fn category_filter_is_exact_and_case_sensitive() {
        let transactions = sample_transactions();

        let food = filter_transactions(
            &transactions,
            &QueryCriteria {
                category_filter: CategoryFilter::Only("Food".to_owned()),
                ..criteria()
            },
        );
        let lowercase_food = filter_transactions(
            &transactions,
            &QueryCriteria {
                category_filter: CategoryFilter::Only("food".to_owned()),
                ..criteria()
            },
        );
        let partial = filter_transactions(
            &transactions,
            &QueryCriteria {
                category_filter: CategoryFilter::Only("Foo".to_owned()),
                ..criteria()
            },
        );

        assert_eq!(ids(&food), ["3", "6"]);
        assert!(lowercase_food.is_empty());
        assert!(partial.is_empty());
    }

    #[test]
    fn filtered_transactions_satisfy_every_predicate() {
        let transactions = sample_transactions();
        let all_criteria = [
            QueryCriteria {
                search_term: "o".to_owned(),
                type_filter: TypeFilter::Outbound,
                ..criteria()
            },
            QueryCriteria {
                search_term: "FOOD".to_owned(),
                category_filter: CategoryFilter::Only("Food".to_owned()),
                ..criteria()
            },
            QueryCriteria {
                type_filter: TypeFilter::Inbound,
                category_filter: CategoryFilter::Only("Gifts".to_owned()),
                ..criteria()
            },
        ];

        for criteria in all_criteria {
            let got = filter_transactions(&transactions, &criteria);

            for transaction in &got {
                let search = criteria.search_term.to_lowercase();
                assert!(
                    transaction.description.to_lowercase().contains(&search)
                        || transaction.category.to_lowercase().contains(&search)
                );
                if criteria.type_filter == TypeFilter::Outbound {
                    assert_eq!(transaction.direction, Direction::Outbound);
                }
                if criteria.type_filter == TypeFilter::Inbound {
                    assert_eq!(transaction.direction, Direction::Inbound);
                }
                if let CategoryFilter::Only(ref category) = criteria.category_filter {
                    assert_eq!(&transaction.category, category);
                }
                assert!(transactions.contains(*transaction));
            }

            let want_count = transactions
                .iter()
                .filter(|transaction| matches(transaction, &criteria))
                .count();
            assert_eq!(got.len(), want_count);
        }
    }

    #[test]
    fn ascending_sorts_keep_every_transaction_in_order() {
        let transactions = sample_transactions();

        for field in [
            SortField::Timestamp,
            SortField::Description,
            SortField::Category,
            SortField::Amount,
            SortField::Status,
        ] {
            let mut sorted = filter_transactions(&transactions, &criteria());
            sort_transactions(&mut sorted, field, SortDirection::Ascending);

            assert_eq!(sorted.len(), transactions.len(), "sorting by {field:?}");
            for pair in sorted.windows(2) {
                assert_ne!(
                    compare_by(field, pair[0], pair[1]),
                    Ordering::Greater,
                    "{} should not come before {} when sorting by {field:?}",
                    pair[0].id,
                    pair[1].id
                );
            }

            let mut got_ids = ids(&sorted);
            got_ids.sort();
            assert_eq!(got_ids, ["1", "2", "3", "4", "5", "6"]);
        }
    }

    #[test]
    fn sorts_by_amount_numerically() {
        let transactions = [
            inbound("small", 900),
            inbound("large", 10_000),
            inbound("medium", 5_000),
        ];
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();

        sort_transactions(&mut sorted, SortField::Amount, SortDirection::Descending);

        assert_eq!(ids(&sorted), ["large", "medium", "small"]);
    }

    #[test]
    fn sorts_strings_ignoring_case() {
        let transactions = [
            Transaction::build("b", Amount::ZERO, Direction::Outbound)
                .description("banana")
                .finalise(),
            Transaction::build("a", Amount::ZERO, Direction::Outbound)
                .description("Apple")
                .finalise(),
            Transaction::build("c", Amount::ZERO, Direction::Outbound)
                .description("Cherry")
                .finalise(),
        ];
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();

        sort_transactions(&mut sorted, SortField::Description, SortDirection::Ascending);

        assert_eq!(ids(&sorted), ["a", "b", "c"]);
    }

    #[test]
    fn sort_is_stable_in_both_directions() {
        let timestamp = datetime!(2025-10-05 12:00 UTC);
        let transactions: Vec<Transaction> = ["first", "second", "third"]
            .into_iter()
            .map(|id| {
                Transaction::build(id, Amount::from_kobo(100), Direction::Outbound)
                    .timestamp(timestamp)
                    .finalise()
            })
            .collect();

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let mut sorted: Vec<&Transaction> = transactions.iter().collect();
            sort_transactions(&mut sorted, SortField::Timestamp, direction);

            assert_eq!(ids(&sorted), ["first", "second", "third"], "{direction:?}");
        }
    }

    #[test]
    fn sorts_by_status() {
        let transactions = [
            Transaction::build("s", Amount::ZERO, Direction::Outbound)
                .status(Status::Success)
                .finalise(),
            Transaction::build("p", Amount::ZERO, Direction::Outbound)
                .status(Status::Pending)
                .finalise(),
        ];
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();

        sort_transactions(&mut sorted, SortField::Status, SortDirection::Ascending);

        assert_eq!(ids(&sorted), ["p", "s"]);
    }

    #[test]
    fn sixty_transactions_span_two_pages() {
        let start = datetime!(2025-01-01 00:00 UTC);
        let transactions: Vec<Transaction> = (0..60)
            .map(|i| {
                Transaction::build(&i.to_string(), Amount::from_kobo(100), Direction::Outbound)
                    .timestamp(start + Duration::minutes(i))
                    .finalise()
            })
            .collect();

        let first = run_query(&transactions, &criteria());
        let second = run_query(
            &transactions,
            &QueryCriteria {
                page: 2,
                ..criteria()
            },
        );

        assert_eq!(first.page_info.total_pages, 2);
        assert_eq!(first.transactions.len(), 50);
        assert_eq!(second.transactions.len(), 10);
        assert_eq!(first.transactions[0].id, "59", "latest transaction first");
        assert_eq!(second.transactions[9].id, "0");
    }

    #[test]
    fn pages_cover_list_without_gaps_or_overlaps() {
        let items: Vec<usize> = (0..23).collect();

        for page_size in 1..=30 {
            let (page_info, _) = paginate(&items, 1, page_size);
            let mut concatenated = Vec::new();

            for page in 1..=page_info.total_pages {
                let (_, visible) = paginate(&items, page, page_size);
                concatenated.extend_from_slice(visible);
            }

            assert_eq!(concatenated, items, "page size {page_size}");
        }
    }

    #[test]
    fn page_past_end_is_clamped_to_last_page() {
        let items: Vec<usize> = (0..60).collect();

        let (page_info, visible) = paginate(&items, 3, 50);

        assert_eq!(page_info.page, 2);
        assert_eq!(visible, &items[50..]);
    }

    #[test]
    fn page_zero_is_first_page() {
        let items: Vec<usize> = (0..60).collect();

        let (page_info, visible) = paginate(&items, 0, 50);

        assert_eq!(page_info.page, 1);
        assert_eq!(visible.len(), 50);
    }

    #[test]
    fn narrowing_filter_on_late_page_clamps_page() {
        let transactions = sample_transactions();
        let criteria = QueryCriteria {
            search_term: "suya".to_owned(),
            page: 3,
            page_size: 2,
            ..criteria()
        };

        let got = run_query(&transactions, &criteria);

        assert_eq!(got.page_info.page, 1);
        assert_eq!(got.page_info.total_pages, 1);
        assert_eq!(ids(&got.transactions), ["6"]);
    }

    #[test]
    fn empty_snapshot_has_zero_everything() {
        let got = run_query(&[], &criteria());

        assert!(got.transactions.is_empty());
        assert_eq!(got.totals.total_inbound.kobo(), 0);
        assert_eq!(got.totals.total_outbound.kobo(), 0);
        assert_eq!(got.totals.net_balance.kobo(), 0);
        assert_eq!(got.page_info.total_pages, 0);
        assert_eq!(got.page_info.filtered_count, 0);
        assert_eq!(got.page_info.page, 1);
    }

    #[test]
    fn category_filter_parses_all() {
        assert_eq!(CategoryFilter::from_query_value("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_query_value(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_query_value("Rent"),
            CategoryFilter::Only("Rent".to_owned())
        );
    }

    #[test]
    fn lists_distinct_categories_in_order() {
        let mut transactions = sample_transactions();
        transactions.push(outbound("uncategorised", 1));

        let got = distinct_categories(&transactions);

        assert_eq!(got, ["Food", "Gifts", "Rent", "Salary", "Transport"]);
    }
}
