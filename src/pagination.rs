//! Page indicators and the pagination bar shown under paged tables.

use std::ops::RangeInclusive;

use maud::{Markup, html};

use crate::transaction::DEFAULT_PAGE_SIZE;

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: usize,
    /// The number of transactions to display per page.
    pub default_page_size: usize,
    /// The maximum number of page links to show in the pagination bar.
    pub max_pages: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_pages: 5,
        }
    }
}

/// One element of the pagination bar.
#[derive(Debug, PartialEq, Eq)]
pub enum PaginationIndicator {
    /// A link to another page.
    Page(usize),
    /// The page being shown.
    CurrPage(usize),
    /// A gap between page links.
    Ellipsis,
    /// A link to the next page.
    NextButton(usize),
    /// A link to the previous page.
    BackButton(usize),
}

/// The window of page numbers centred on `curr_page`, at most `max_pages` wide.
fn page_window(curr_page: usize, page_count: usize, max_pages: usize) -> RangeInclusive<usize> {
    let half = max_pages / 2;

    if page_count <= max_pages {
        1..=page_count
    } else if curr_page <= half {
        1..=max_pages
    } else if curr_page > page_count - half {
        (page_count - max_pages + 1)..=page_count
    } else {
        (curr_page - half)..=(curr_page + half)
    }
}

/// Build the pagination bar for `curr_page` of `page_count` pages.
///
/// When there are more than `max_pages` pages, the first and last pages stay
/// reachable with an ellipsis marking the skipped pages.
pub fn create_pagination_indicators(
    curr_page: usize,
    page_count: usize,
    max_pages: usize,
) -> Vec<PaginationIndicator> {
    let half = max_pages / 2;
    let mut indicators = Vec::new();

    if curr_page > 1 {
        indicators.push(PaginationIndicator::BackButton(curr_page - 1));
    }

    let truncated = page_count > max_pages;

    if truncated && curr_page > half + 1 {
        indicators.push(PaginationIndicator::Page(1));
        indicators.push(PaginationIndicator::Ellipsis);
    }

    indicators.extend(page_window(curr_page, page_count, max_pages).map(|page| {
        if page == curr_page {
            PaginationIndicator::CurrPage(page)
        } else {
            PaginationIndicator::Page(page)
        }
    }));

    if truncated && curr_page < page_count - half {
        indicators.push(PaginationIndicator::Ellipsis);
        indicators.push(PaginationIndicator::Page(page_count));
    }

    if curr_page < page_count {
        indicators.push(PaginationIndicator::NextButton(curr_page + 1));
    }

    indicators
}

/// Render `indicators` as a navigation bar.
///
/// `page_url` gives the link for a page number. Links carry `hx-get` so htmx
/// swaps in `hx_target` instead of reloading the page.
pub fn pagination_nav(
    indicators: &[PaginationIndicator],
    page_url: impl Fn(usize) -> String,
    hx_target: &str,
) -> Markup {
    const LINK_CLASS: &str = "block px-3 py-2 rounded-sm text-blue-600 hover:underline";

    html! {
        nav class="pagination flex justify-center" aria-label="Pagination"
        {
            ul class="pagination flex items-center gap-1 p-0 m-0"
            {
                @for indicator in indicators {
                    li
                    {
                        @match indicator {
                            PaginationIndicator::Page(page) => {
                                a
                                    href=(page_url(*page))
                                    hx-get=(page_url(*page))
                                    hx-target=(hx_target)
                                    hx-push-url="true"
                                    class=(LINK_CLASS)
                                { (page) }
                            }
                            PaginationIndicator::CurrPage(page) => {
                                span
                                    aria-current="page"
                                    class="block px-3 py-2 rounded-sm font-bold text-black dark:text-white"
                                { (page) }
                            }
                            PaginationIndicator::Ellipsis => {
                                span class="block px-3 py-2 text-gray-500" { "..." }
                            }
                            PaginationIndicator::BackButton(page) => {
                                a
                                    href=(page_url(*page))
                                    hx-get=(page_url(*page))
                                    hx-target=(hx_target)
                                    hx-push-url="true"
                                    role="button"
                                    data-page-link="back"
                                    class=(LINK_CLASS)
                                { "Back" }
                            }
                            PaginationIndicator::NextButton(page) => {
                                a
                                    href=(page_url(*page))
                                    hx-get=(page_url(*page))
                                    hx-target=(hx_target)
                                    hx-push-url="true"
                                    role="button"
                                    data-page-link="next"
                                    class=(LINK_CLASS)
                                { "Next" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::{PaginationIndicator, create_pagination_indicators, pagination_nav};

    #[test]
    fn single_page_has_no_buttons() {
        let got = create_pagination_indicators(1, 1, 5);

        assert_eq!(got, [PaginationIndicator::CurrPage(1)]);
    }

    #[test]
    fn no_pages_has_no_indicators() {
        let got = create_pagination_indicators(1, 0, 5);

        assert!(got.is_empty(), "got {got:?}");
    }

    #[test]
    fn shows_every_page_when_they_fit() {
        let want = [
            PaginationIndicator::BackButton(2),
            PaginationIndicator::Page(1),
            PaginationIndicator::Page(2),
            PaginationIndicator::CurrPage(3),
            PaginationIndicator::Page(4),
            PaginationIndicator::NextButton(4),
        ];

        let got = create_pagination_indicators(3, 4, 5);

        assert_eq!(got, want);
    }

    #[test]
    fn first_page_of_many_skips_to_last() {
        let want = [
            PaginationIndicator::CurrPage(1),
            PaginationIndicator::Page(2),
            PaginationIndicator::Page(3),
            PaginationIndicator::Page(4),
            PaginationIndicator::Page(5),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(12),
            PaginationIndicator::NextButton(2),
        ];

        let got = create_pagination_indicators(1, 12, 5);

        assert_eq!(got, want);
    }

    #[test]
    fn middle_page_has_ellipsis_on_both_sides() {
        let want = [
            PaginationIndicator::BackButton(5),
            PaginationIndicator::Page(1),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(4),
            PaginationIndicator::Page(5),
            PaginationIndicator::CurrPage(6),
            PaginationIndicator::Page(7),
            PaginationIndicator::Page(8),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(12),
            PaginationIndicator::NextButton(7),
        ];

        let got = create_pagination_indicators(6, 12, 5);

        assert_eq!(got, want);
    }

    #[test]
    fn last_page_of_many_skips_to_first() {
        let want = [
            PaginationIndicator::BackButton(11),
            PaginationIndicator::Page(1),
            PaginationIndicator::Ellipsis,
            PaginationIndicator::Page(8),
            PaginationIndicator::Page(9),
            PaginationIndicator::Page(10),
            PaginationIndicator::Page(11),
            PaginationIndicator::CurrPage(12),
        ];

        let got = create_pagination_indicators(12, 12, 5);

        assert_eq!(got, want);
    }

    #[test]
    fn nav_links_to_pages() {
        let indicators = create_pagination_indicators(2, 3, 5);

        let markup = pagination_nav(&indicators, |page| format!("/items?page={page}"), "#list");
        let html = Html::parse_fragment(&markup.into_string());

        let link_selector = Selector::parse("a[href]").unwrap();
        let hrefs: Vec<&str> = html
            .select(&link_selector)
            .filter_map(|link| link.value().attr("href"))
            .collect();
        assert_eq!(
            hrefs,
            [
                "/items?page=1",
                "/items?page=1",
                "/items?page=3",
                "/items?page=3"
            ]
        );

        let current_selector = Selector::parse("span[aria-current='page']").unwrap();
        let current = html.select(&current_selector).next().unwrap();
        assert_eq!(current.text().collect::<String>(), "2");
    }
}
