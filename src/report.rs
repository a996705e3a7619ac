//! On-demand aggregation over a record snapshot.
//!
//! Totals are recomputed with a linear scan on every call. There is no
//! memoization; at tens to low thousands of records nothing more is needed.

use crate::model::{Category, Record};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Sums `amount` over the records whose category equals `category`.
///
/// A category with no matching records totals zero.
pub fn total_by_category(records: &[Record], category: Category) -> Decimal {
    records
        .iter()
        .filter(|r| r.category() == category)
        .map(|r| r.amount().value())
        .sum()
}

/// The running total for every category, in form order.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    totals: Vec<CategoryTotal>,
}

/// One dashboard line: a category and its running total.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    category: Category,
    total: Decimal,
}

impl CategoryTotal {
    pub fn category(&self) -> Category {
        self.category
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}

impl Dashboard {
    /// Computes totals for all categories from a record snapshot.
    pub fn build(records: &[Record]) -> Self {
        let totals = Category::ALL
            .iter()
            .map(|&category| CategoryTotal {
                category,
                total: total_by_category(records, category),
            })
            .collect();
        Self { totals }
    }

    pub fn totals(&self) -> &[CategoryTotal] {
        &self.totals
    }
}

impl Display for Dashboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .totals
            .iter()
            .map(|t| format!("{}: GHS {}", t.category, t.total))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}
