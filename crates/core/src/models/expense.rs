use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The category of an expense.
/// A fixed, closed set — the UI renders exactly these four options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Bills,
}

impl Category {
    /// All categories, in the order the UI presents them.
    pub const ALL: [Category; 4] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Bills,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Food => write!(f, "Food"),
            Category::Travel => write!(f, "Travel"),
            Category::Shopping => write!(f, "Shopping"),
            Category::Bills => write!(f, "Bills"),
        }
    }
}

/// Sort order for expense listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest date first
    DateDesc,
    /// Oldest date first
    DateAsc,
    /// Largest amount first
    AmountDesc,
    /// Smallest amount first
    AmountAsc,
}

/// A single expense entry.
///
/// The serde shape of this struct IS the persisted storage layout:
/// `{"text": …, "amount": …, "category": …, "date": "YYYY-MM-DD"}`.
/// Records carry no id — the list addresses them by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// User-entered description (non-empty after trimming)
    pub text: String,

    /// Amount spent (always strictly positive while in the list)
    pub amount: f64,

    /// One of the four fixed categories
    pub category: Category,

    /// Date of the expense (no time component — daily granularity)
    pub date: NaiveDate,
}

impl ExpenseRecord {
    pub fn new(
        text: impl Into<String>,
        amount: f64,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            text: text.into(),
            amount,
            category,
            date,
        }
    }
}
