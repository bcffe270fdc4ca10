//! Defines the route handlers for the transactions page and the JSON query API.

use axum::{
    Json,
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRequest;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error, endpoints, navigation::NavBar, pagination::PaginationConfig,
    session::Session, timezone::to_local,
};

use super::{
    feed::{Snapshot, TransactionFeed},
    models::Transaction,
    query::{
        CategoryFilter, QueryCriteria, SortDirection, SortField, TypeFilter, distinct_categories,
        run_query,
    },
    view::{TransactionRow, TransactionsPageModel, transactions_fragment_view, transactions_view},
};

/// The query string of the transactions page and API.
///
/// Missing parameters fall back to the defaults: no search, all types, all
/// categories, latest first, page 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionsQuery {
    /// Text to look for in descriptions and categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// "all", "inbound" or "outbound".
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_filter: Option<TypeFilter>,
    /// An exact category, or "all".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// The column to sort by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortField>,
    /// "ascending" or "descending".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
    /// The page to show, starting at 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

impl TransactionsQuery {
    /// Fill in defaults for anything missing from the query string.
    pub(crate) fn into_criteria(self, pagination_config: &PaginationConfig) -> QueryCriteria {
        QueryCriteria {
            search_term: self.search.unwrap_or_default(),
            type_filter: self.type_filter.unwrap_or_default(),
            category_filter: self
                .category
                .as_deref()
                .map(CategoryFilter::from_query_value)
                .unwrap_or_default(),
            sort_field: self.sort.unwrap_or_default(),
            sort_direction: self.direction.unwrap_or_default(),
            page: self.page.unwrap_or(pagination_config.default_page),
            page_size: pagination_config.default_page_size,
        }
    }

    /// The query string that reproduces `criteria`.
    pub(crate) fn from_criteria(criteria: &QueryCriteria) -> Self {
        Self {
            search: (!criteria.search_term.is_empty()).then(|| criteria.search_term.clone()),
            type_filter: Some(criteria.type_filter),
            category: Some(criteria.category_filter.as_query_value().to_owned()),
            sort: Some(criteria.sort_field),
            direction: Some(criteria.sort_direction),
            page: Some(criteria.page),
        }
    }

    pub(crate) fn with_page(self, page: usize) -> Self {
        Self {
            page: Some(page),
            ..self
        }
    }

    /// Change the sort order and go back to the first page.
    pub(crate) fn with_sort(self, field: SortField, direction: SortDirection) -> Self {
        Self {
            sort: Some(field),
            direction: Some(direction),
            page: None,
            ..self
        }
    }

    pub(crate) fn to_url(&self, route: &str) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(query) if query.is_empty() => route.to_owned(),
            Ok(query) => format!("{route}?{query}"),
            Err(error) => {
                tracing::error!("Could not encode transactions query {self:?}: {error}");
                route.to_owned()
            }
        }
    }
}

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsViewState {
    feed: TransactionFeed,
    session: Session,
    /// The local timezone as a canonical timezone name, e.g. "Africa/Lagos".
    local_timezone: String,
    pagination_config: PaginationConfig,
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            feed: state.feed.clone(),
            session: state.session.clone(),
            local_timezone: state.local_timezone.clone(),
            pagination_config: state.pagination_config.clone(),
        }
    }
}

/// Render the user's transactions, filtered, sorted and paged per the query string.
///
/// htmx requests get only the `#transactions-content` fragment and the
/// filter form's sort inputs, swapped out of band. If the
/// backend cannot be reached the page still renders, with no transactions,
/// zero totals and a banner with a retry button.
pub async fn get_transactions_page(
    HxRequest(is_htmx_request): HxRequest,
    State(state): State<TransactionsViewState>,
    Query(query): Query<TransactionsQuery>,
) -> Response {
    let criteria = query.into_criteria(&state.pagination_config);

    let (snapshot, load_error) = match state.feed.refresh().await {
        Ok(snapshot) => (snapshot, None),
        Err(error) if error.is_load_failure() => {
            tracing::error!("could not load transactions: {error}");
            (Snapshot::default(), Some(error.user_message()))
        }
        Err(error) => return render_error(error, is_htmx_request),
    };

    let result = run_query(&snapshot.transactions, &criteria);
    let rows = match local_rows(&result.transactions, &state.local_timezone) {
        Ok(rows) => rows,
        Err(error) => return render_error(error, is_htmx_request),
    };

    let model = TransactionsPageModel {
        rows,
        totals: result.totals,
        page_info: result.page_info,
        criteria: QueryCriteria {
            page: result.page_info.page,
            ..criteria
        },
        categories: distinct_categories(&snapshot.transactions),
        load_error,
        max_pages: state.pagination_config.max_pages,
    };

    if is_htmx_request {
        transactions_fragment_view(&model).into_response()
    } else {
        let nav_bar =
            NavBar::new(endpoints::TRANSACTIONS_VIEW, state.session.username()).into_html();

        transactions_view(&model, nav_bar, state.session.theme()).into_response()
    }
}

/// Run a transactions query and return the result as JSON.
///
/// Backend failures are reported as `502 Bad Gateway` with an `error` message.
pub async fn get_transactions_api(
    State(state): State<TransactionsViewState>,
    Query(query): Query<TransactionsQuery>,
) -> Response {
    let criteria = query.into_criteria(&state.pagination_config);

    match state.feed.refresh().await {
        Ok(snapshot) => Json(run_query(&snapshot.transactions, &criteria)).into_response(),
        Err(error) if error.is_load_failure() => {
            tracing::error!("could not load transactions: {error}");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": error.user_message() })),
            )
                .into_response()
        }
        Err(error) => error.into_response(),
    }
}

fn local_rows<'a>(
    transactions: &[&'a Transaction],
    local_timezone: &str,
) -> Result<Vec<TransactionRow<'a>>, Error> {
    transactions
        .iter()
        .map(|&transaction| {
            Ok(TransactionRow {
                transaction,
                local_timestamp: to_local(transaction.timestamp, local_timezone)?,
            })
        })
        .collect()
}

fn render_error(error: Error, is_htmx_request: bool) -> Response {
    if is_htmx_request {
        error.into_alert_response()
    } else {
        error.into_response()
    }
}
