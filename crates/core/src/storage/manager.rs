use tracing::warn;

use crate::errors::CoreError;
use crate::models::expense::ExpenseRecord;

use super::slot::StorageSlot;

/// High-level storage operations: serialize the expense list into the
/// slot and rehydrate it back out.
///
/// The stored form is a bare JSON array of records — no envelope, no
/// version field — so existing persisted data keeps loading unchanged.
pub struct StorageManager;

impl StorageManager {
    /// Serialize a list to its stored JSON form.
    pub fn encode(expenses: &[ExpenseRecord]) -> Result<String, CoreError> {
        serde_json::to_string(expenses)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize expenses: {e}")))
    }

    /// Deserialize a stored JSON string back into a list.
    pub fn decode(raw: &str) -> Result<Vec<ExpenseRecord>, CoreError> {
        serde_json::from_str(raw)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize expenses: {e}")))
    }

    /// Rehydrate the list from a slot, failing safe.
    ///
    /// An empty slot yields an empty list. Unreadable or unparseable
    /// contents also yield an empty list — corrupt storage must never
    /// prevent startup — with the cause logged at `warn`.
    pub fn load(slot: &dyn StorageSlot) -> Vec<ExpenseRecord> {
        let raw = match slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("failed to read stored expenses, starting empty: {e}");
                return Vec::new();
            }
        };

        match Self::decode(&raw) {
            Ok(expenses) => expenses,
            Err(e) => {
                warn!("stored expenses are not valid JSON, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Serialize the full list and overwrite the slot.
    pub fn persist(slot: &mut dyn StorageSlot, expenses: &[ExpenseRecord]) -> Result<(), CoreError> {
        let raw = Self::encode(expenses)?;
        slot.write(&raw)
    }
}
