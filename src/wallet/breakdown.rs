//! Outbound spend grouped by category.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::transaction::{Amount, Direction, Transaction};

/// The label used for transactions without a category.
pub const UNCATEGORISED_LABEL: &str = "Uncategorised";

/// Background colours for categories, reused in order when there are more
/// categories than colours.
pub const CATEGORY_PALETTE: [&str; 8] = [
    "bg-blue-500",
    "bg-emerald-500",
    "bg-amber-500",
    "bg-rose-500",
    "bg-violet-500",
    "bg-cyan-500",
    "bg-lime-500",
    "bg-fuchsia-500",
];

/// The money spent in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend<'a> {
    /// The category label, or [UNCATEGORISED_LABEL].
    pub category: &'a str,
    /// The sum of outbound amounts in the category.
    pub total: Amount,
    /// The number of outbound transactions in the category.
    pub count: usize,
    /// The category's share of all outbound money, as a whole percentage.
    pub percent: u32,
    /// The palette colour for the category.
    pub colour: &'static str,
}

/// Group outbound transactions by category, largest spend first.
///
/// Categories with equal spend are ordered by name. Colours are taken from
/// [CATEGORY_PALETTE] in that order.
pub fn outbound_by_category(transactions: &[Transaction]) -> Vec<CategorySpend<'_>> {
    let mut totals: HashMap<&str, (Amount, usize)> = HashMap::new();

    for transaction in transactions {
        if transaction.direction != Direction::Outbound {
            continue;
        }

        let category = if transaction.category.is_empty() {
            UNCATEGORISED_LABEL
        } else {
            transaction.category.as_str()
        };
        let entry = totals.entry(category).or_insert((Amount::ZERO, 0));
        entry.0 = entry.0 + transaction.amount;
        entry.1 += 1;
    }

    let outbound_total: Amount = totals.values().map(|(total, _)| total).sum();

    let mut categories: Vec<(&str, Amount, usize)> = totals
        .into_iter()
        .map(|(category, (total, count))| (category, total, count))
        .collect();
    categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    categories
        .into_iter()
        .zip(CATEGORY_PALETTE.into_iter().cycle())
        .map(|((category, total, count), colour)| CategorySpend {
            category,
            total,
            count,
            percent: percent_of(total, outbound_total),
            colour,
        })
        .collect()
}

/// `part` as a whole percentage of `whole`, rounding halves up.
fn percent_of(part: Amount, whole: Amount) -> u32 {
    (part.naira() * Decimal::ONE_HUNDRED)
        .checked_div(whole.naira())
        .map(|percent| percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|percent| percent.to_u32())
        .unwrap_or(0)
}
