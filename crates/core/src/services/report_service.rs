use crate::models::expense::{Category, ExpenseRecord};
use crate::models::month::MonthKey;
use crate::models::report::{CategorySummary, ExpenseSummary};

/// Computes derived views of the expense list: month filter, total,
/// per-category aggregates, and the summary report.
///
/// All functions are pure — identical inputs give identical outputs,
/// cheap enough to recompute on every render.
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Restrict the list to one month. `None` is the identity filter.
    /// Relative order is preserved.
    pub fn filter_by_month<'a>(
        &self,
        expenses: &'a [ExpenseRecord],
        month: Option<&MonthKey>,
    ) -> Vec<&'a ExpenseRecord> {
        match month {
            None => expenses.iter().collect(),
            Some(m) => expenses.iter().filter(|e| m.contains(e.date)).collect(),
        }
    }

    /// Sum of amounts over a filtered list. 0 for an empty list.
    pub fn total(&self, expenses: &[&ExpenseRecord]) -> f64 {
        expenses.iter().map(|e| e.amount).sum()
    }

    /// Accumulate amounts per category.
    ///
    /// Pair order is the first-occurrence order of each category in the
    /// filtered list; categories with no records are absent, never
    /// present with 0.
    pub fn category_totals(&self, expenses: &[&ExpenseRecord]) -> Vec<(Category, f64)> {
        let mut totals: Vec<(Category, f64)> = Vec::new();

        for expense in expenses {
            match totals.iter_mut().find(|(c, _)| *c == expense.category) {
                Some((_, sum)) => *sum += expense.amount,
                None => totals.push((expense.category, expense.amount)),
            }
        }

        totals
    }

    /// Build a summary report for a filtered list: count, total, and a
    /// per-category breakdown with share percentages, largest first.
    pub fn summary(
        &self,
        expenses: &[&ExpenseRecord],
        month: Option<MonthKey>,
    ) -> ExpenseSummary {
        let total = self.total(expenses);

        let mut categories: Vec<CategorySummary> = self
            .category_totals(expenses)
            .into_iter()
            .map(|(category, cat_total)| CategorySummary {
                category,
                total: cat_total,
                share_pct: if total > 0.0 {
                    (cat_total / total) * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        // Largest share first
        categories.sort_by(|a, b| {
            b.share_pct
                .partial_cmp(&a.share_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ExpenseSummary {
            month,
            record_count: expenses.len(),
            total,
            categories,
        }
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}
