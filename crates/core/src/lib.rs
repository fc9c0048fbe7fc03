pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::NaiveDate;
use tracing::{debug, info};

use models::{
    chart::PieSlice,
    expense::{Category, ExpenseRecord, SortOrder},
    month::MonthKey,
    report::ExpenseSummary,
};
use services::{
    chart_service::ChartService, expense_service::ExpenseService,
    report_service::ReportService,
};
use storage::manager::StorageManager;
use storage::slot::{MemorySlot, StorageSlot};

use errors::CoreError;

/// Main entry point for the Expense Tracker core library.
/// Holds the expense list, the storage slot, and all services needed
/// to operate on it.
///
/// Every successful mutation is written to the slot before it becomes
/// visible in memory, so the persisted copy is always a serialization
/// of the exact current list.
#[must_use]
pub struct ExpenseTracker {
    expenses: Vec<ExpenseRecord>,
    trash: Vec<ExpenseRecord>,
    slot: Box<dyn StorageSlot>,
    expense_service: ExpenseService,
    report_service: ReportService,
    chart_service: ChartService,
}

impl std::fmt::Debug for ExpenseTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseTracker")
            .field("expenses", &self.expenses.len())
            .field("trash", &self.trash.len())
            .finish()
    }
}

impl ExpenseTracker {
    /// Start a tracker backed by the given slot, rehydrating any list
    /// persisted there. An empty, unreadable, or corrupt slot yields an
    /// empty list — startup never fails.
    pub fn initialize(slot: Box<dyn StorageSlot>) -> Self {
        let expenses = StorageManager::load(slot.as_ref());
        info!("loaded {} expense(s) from storage", expenses.len());
        Self::build(expenses, slot)
    }

    /// A tracker over a fresh in-memory slot. State lives only as long
    /// as the slot does; useful for tests and previews.
    pub fn in_memory() -> Self {
        Self::initialize(Box::new(MemorySlot::new()))
    }

    // ── Expense Management ──────────────────────────────────────────

    /// Record a new expense at the end of the list.
    ///
    /// Rejected (list and slot untouched) when the description is empty
    /// after trimming or the amount is not finite and positive.
    pub fn add_expense(
        &mut self,
        text: impl Into<String>,
        amount: f64,
        category: Category,
        date: NaiveDate,
    ) -> Result<(), CoreError> {
        let record = ExpenseRecord::new(text, amount, category, date);
        let mut next = self.expenses.clone();
        self.expense_service.add(&mut next, record)?;
        self.commit(next)?;
        debug!("added expense, list now has {} record(s)", self.expenses.len());
        Ok(())
    }

    /// Record an expense from raw form input, where the date arrives as
    /// a string. Additionally rejects an empty or malformed date.
    pub fn add_expense_from_input(
        &mut self,
        text: &str,
        amount: f64,
        category: Category,
        date: &str,
    ) -> Result<(), CoreError> {
        if date.trim().is_empty() {
            return Err(CoreError::Validation("Expense date must be set".into()));
        }
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| CoreError::Validation(format!("Invalid expense date '{date}'")))?;
        self.add_expense(text, amount, category, date)
    }

    /// Reduce the amount at `index` by 1. A record reaching 0 is
    /// removed entirely; all other records keep their values and order.
    ///
    /// Returns the surviving amount, or `None` when the record was removed.
    pub fn decrement_expense(&mut self, index: usize) -> Result<Option<f64>, CoreError> {
        let mut next = self.expenses.clone();
        let remaining = self.expense_service.decrement(&mut next, index)?;
        self.commit(next)?;
        Ok(remaining)
    }

    /// Remove the record at `index` permanently. Returns the removed record.
    pub fn remove_expense(&mut self, index: usize) -> Result<ExpenseRecord, CoreError> {
        let mut next = self.expenses.clone();
        let removed = self.expense_service.remove(&mut next, index)?;
        self.commit(next)?;
        Ok(removed)
    }

    /// Serialize the full list and overwrite the slot.
    ///
    /// Runs automatically after every successful mutation; public so a
    /// caller that replaced the slot contents out of band can rewrite
    /// the authoritative copy.
    pub fn persist(&mut self) -> Result<(), CoreError> {
        StorageManager::persist(self.slot.as_mut(), &self.expenses)
    }

    // ── Derived Views ───────────────────────────────────────────────

    /// All records, in insertion order (display order).
    #[must_use]
    pub fn get_expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    /// Total number of records.
    #[must_use]
    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Records matching the month filter, in insertion order.
    /// `None` means no filter — the whole list.
    #[must_use]
    pub fn get_filtered_expenses(&self, month: Option<&MonthKey>) -> Vec<&ExpenseRecord> {
        self.report_service.filter_by_month(&self.expenses, month)
    }

    /// Sum of amounts over the month-filtered list. 0 when nothing matches.
    #[must_use]
    pub fn get_total(&self, month: Option<&MonthKey>) -> f64 {
        self.report_service.total(&self.get_filtered_expenses(month))
    }

    /// Per-category totals over the month-filtered list, in
    /// first-occurrence order. Categories with no records are absent.
    #[must_use]
    pub fn get_category_totals(&self, month: Option<&MonthKey>) -> Vec<(Category, f64)> {
        self.report_service
            .category_totals(&self.get_filtered_expenses(month))
    }

    /// Pie-chart slices for the month-filtered list. Empty when nothing
    /// matches — the frontend then omits the chart.
    #[must_use]
    pub fn generate_pie_chart(&self, month: Option<&MonthKey>) -> Vec<PieSlice> {
        self.chart_service.build_pie(&self.get_filtered_expenses(month))
    }

    /// Full summary of the month-filtered list: count, total, and the
    /// category breakdown with share percentages.
    #[must_use]
    pub fn get_monthly_summary(&self, month: Option<MonthKey>) -> ExpenseSummary {
        self.report_service
            .summary(&self.get_filtered_expenses(month.as_ref()), month)
    }

    /// Every month that has at least one record, sorted ascending.
    /// Feeds the month-picker options.
    #[must_use]
    pub fn get_available_months(&self) -> Vec<MonthKey> {
        let mut months: Vec<MonthKey> =
            self.expenses.iter().map(|e| MonthKey::of(e.date)).collect();
        months.sort();
        months.dedup();
        months
    }

    // ── Search & Sorting ────────────────────────────────────────────

    /// Records whose description contains `query`, case-insensitive.
    #[must_use]
    pub fn search_expenses(&self, query: &str) -> Vec<&ExpenseRecord> {
        let q = query.to_lowercase();
        self.expenses
            .iter()
            .filter(|e| e.text.to_lowercase().contains(&q))
            .collect()
    }

    /// Records in a given category, in insertion order.
    #[must_use]
    pub fn get_expenses_for_category(&self, category: Category) -> Vec<&ExpenseRecord> {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Records sorted for display. The underlying list keeps its
    /// insertion order; only the returned view is reordered.
    #[must_use]
    pub fn get_expenses_sorted(&self, order: &SortOrder) -> Vec<&ExpenseRecord> {
        let mut expenses: Vec<&ExpenseRecord> = self.expenses.iter().collect();
        match order {
            SortOrder::DateDesc => expenses.sort_by(|a, b| b.date.cmp(&a.date)),
            SortOrder::DateAsc => expenses.sort_by(|a, b| a.date.cmp(&b.date)),
            SortOrder::AmountDesc => expenses.sort_by(|a, b| {
                b.amount
                    .partial_cmp(&a.amount)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            SortOrder::AmountAsc => expenses.sort_by(|a, b| {
                a.amount
                    .partial_cmp(&b.amount)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
        }
        expenses
    }

    /// Date of the oldest record. The list is insertion-ordered, not
    /// date-ordered, so this scans.
    #[must_use]
    pub fn earliest_expense_date(&self) -> Option<NaiveDate> {
        self.expenses.iter().map(|e| e.date).min()
    }

    /// Date of the newest record.
    #[must_use]
    pub fn latest_expense_date(&self) -> Option<NaiveDate> {
        self.expenses.iter().map(|e| e.date).max()
    }

    // ── Undo (Trash) ────────────────────────────────────────────────

    /// Remove a record but keep it in the trash for potential undo.
    /// The trash is session-scoped — it is never written to the slot.
    pub fn remove_expense_to_trash(&mut self, index: usize) -> Result<(), CoreError> {
        let mut next = self.expenses.clone();
        let removed = self.expense_service.remove(&mut next, index)?;
        self.commit(next)?;
        self.trash.push(removed);
        Ok(())
    }

    /// Restore the most recently trashed record to the end of the list.
    /// Returns the restored record, or `None` if the trash is empty.
    pub fn undo_last_removal(&mut self) -> Result<Option<ExpenseRecord>, CoreError> {
        let record = match self.trash.pop() {
            Some(r) => r,
            None => return Ok(None),
        };

        let mut next = self.expenses.clone();
        if let Err(e) = self.expense_service.add(&mut next, record.clone()) {
            self.trash.push(record);
            return Err(e);
        }
        if let Err(e) = self.commit(next) {
            self.trash.push(record);
            return Err(e);
        }
        Ok(Some(record))
    }

    /// Records currently in the trash, oldest removal first.
    #[must_use]
    pub fn get_trash(&self) -> &[ExpenseRecord] {
        &self.trash
    }

    /// Discard all trashed records permanently.
    pub fn clear_trash(&mut self) {
        self.trash.clear();
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all records as pretty-printed JSON.
    pub fn export_expenses_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.expenses)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize expenses: {e}")))
    }

    /// Export all records as CSV. Columns: text, amount, category, date.
    #[must_use]
    pub fn export_expenses_to_csv(&self) -> String {
        let mut csv = String::from("text,amount,category,date\n");
        for expense in &self.expenses {
            let text = &expense.text;
            // Escape CSV: quote fields containing commas, quotes, or newlines
            let escaped_text = if text.contains(',') || text.contains('"') || text.contains('\n') {
                format!("\"{}\"", text.replace('"', "\"\""))
            } else {
                text.clone()
            };
            csv.push_str(&format!(
                "{},{},{},{}\n",
                escaped_text, expense.amount, expense.category, expense.date,
            ));
        }
        csv
    }

    /// Import records from a JSON array. Every record is validated
    /// before any is added; if one fails, none are imported.
    /// Returns the number of records imported.
    pub fn import_expenses_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let records: Vec<ExpenseRecord> = serde_json::from_str(json)?;

        let mut next = self.expenses.clone();
        for record in records.iter() {
            self.expense_service.add(&mut next, record.clone())?;
        }

        let count = records.len();
        self.commit(next)?;
        debug!("imported {count} expense(s)");
        Ok(count)
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Persist-then-commit: the slot accepts the new list before memory
    /// does, so a failed write leaves both copies at the previous state.
    fn commit(&mut self, next: Vec<ExpenseRecord>) -> Result<(), CoreError> {
        StorageManager::persist(self.slot.as_mut(), &next)?;
        self.expenses = next;
        Ok(())
    }

    fn build(expenses: Vec<ExpenseRecord>, slot: Box<dyn StorageSlot>) -> Self {
        Self {
            expenses,
            trash: Vec::new(),
            slot,
            expense_service: ExpenseService::new(),
            report_service: ReportService::new(),
            chart_service: ChartService::new(),
        }
    }
}
