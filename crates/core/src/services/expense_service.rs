use crate::errors::CoreError;
use crate::models::expense::ExpenseRecord;

/// Manages the expense list: validated add, decrement, remove.
///
/// Pure business logic — no I/O. The caller owns the list and decides
/// when to persist it.
pub struct ExpenseService;

impl ExpenseService {
    pub fn new() -> Self {
        Self
    }

    /// Append a record to the end of the list.
    /// Validates first; on rejection the list is untouched.
    pub fn add(
        &self,
        expenses: &mut Vec<ExpenseRecord>,
        record: ExpenseRecord,
    ) -> Result<(), CoreError> {
        self.validate(&record)?;
        expenses.push(record);
        Ok(())
    }

    /// Reduce the amount at `index` by exactly 1, floored at 0.
    /// A record whose amount reaches 0 is removed from the list —
    /// nothing is ever retained at zero. All other records and their
    /// relative order are unchanged.
    ///
    /// Returns the surviving amount, or `None` when the record was removed.
    pub fn decrement(
        &self,
        expenses: &mut Vec<ExpenseRecord>,
        index: usize,
    ) -> Result<Option<f64>, CoreError> {
        let record = expenses
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfBounds(index))?;

        let next = (record.amount - 1.0).max(0.0);
        if next > 0.0 {
            record.amount = next;
            Ok(Some(next))
        } else {
            expenses.remove(index);
            Ok(None)
        }
    }

    /// Remove the record at `index`, preserving the order of the rest.
    /// Returns the removed record.
    pub fn remove(
        &self,
        expenses: &mut Vec<ExpenseRecord>,
        index: usize,
    ) -> Result<ExpenseRecord, CoreError> {
        if index >= expenses.len() {
            return Err(CoreError::IndexOutOfBounds(index));
        }
        Ok(expenses.remove(index))
    }

    /// Validate a record before it enters the list.
    ///
    /// Rules:
    /// - Description must be non-empty after trimming
    /// - Amount must be finite and strictly positive
    fn validate(&self, record: &ExpenseRecord) -> Result<(), CoreError> {
        if record.text.trim().is_empty() {
            return Err(CoreError::Validation(
                "Expense description must not be empty".into(),
            ));
        }

        if !record.amount.is_finite() || record.amount <= 0.0 {
            return Err(CoreError::Validation(
                "Expense amount must be positive".into(),
            ));
        }

        Ok(())
    }
}

impl Default for ExpenseService {
    fn default() -> Self {
        Self::new()
    }
}
