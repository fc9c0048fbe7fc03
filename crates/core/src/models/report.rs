use serde::{Deserialize, Serialize};

use super::expense::Category;
use super::month::MonthKey;

/// Summary of the expense list, optionally restricted to one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// The month the summary covers, or `None` for the whole list
    pub month: Option<MonthKey>,

    /// Number of matching records
    pub record_count: usize,

    /// Sum of all matching amounts
    pub total: f64,

    /// Per-category breakdown, largest share first
    pub categories: Vec<CategorySummary>,
}

/// Summary of a single category's share of spending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    /// The category
    pub category: Category,

    /// Sum of amounts in this category
    pub total: f64,

    /// This category's share of the overall total, in percent
    pub share_pct: f64,
}
