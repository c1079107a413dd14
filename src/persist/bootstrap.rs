//! One-shot startup load of persisted budget state.

use std::sync::Arc;

use crate::budget::{BudgetState, Expense};

use super::kv::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Key holding the budget, text-encoded as a plain number.
pub const BUDGET_KEY: &str = "budget";

/// Key holding the expense sequence, text-encoded as JSON.
pub const EXPENSES_KEY: &str = "expenses";

/// Reads the durable store once at process start to build the budget
/// store's initial state, and writes state back on behalf of the
/// presentation layer.
pub struct Bootstrap {
    store: Arc<dyn KeyValueStore>,
}

impl Bootstrap {
    /// Bootstrap over an explicit store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Bootstrap over the default on-disk store.
    pub fn durable() -> Result<Self, StoreError> {
        let store = FileStore::open(FileStore::default_path())?;
        Ok(Self::new(Arc::new(store)))
    }

    /// Bootstrap that loads nothing and persists nothing durably.
    /// For headless and test contexts.
    pub fn ephemeral() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The persisted budget, or 0 when the key is absent.
    pub fn load_initial_budget(&self) -> Result<f64, StoreError> {
        match self.store.get(BUDGET_KEY)? {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|e| StoreError::MalformedValue {
                    key: BUDGET_KEY.to_string(),
                    message: e.to_string(),
                }),
            None => Ok(0.0),
        }
    }

    /// The persisted expense sequence, or empty when the key is absent.
    pub fn load_initial_expenses(&self) -> Result<Vec<Expense>, StoreError> {
        match self.store.get(EXPENSES_KEY)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StoreError::MalformedValue {
                    key: EXPENSES_KEY.to_string(),
                    message: e.to_string(),
                })
            }
            None => Ok(Vec::new()),
        }
    }

    /// Build the complete initial state for the budget store.
    pub fn initial_state(&self) -> Result<BudgetState, StoreError> {
        let budget = self.load_initial_budget()?;
        let expenses = self.load_initial_expenses()?;
        tracing::debug!(budget, count = expenses.len(), "loaded persisted state");
        Ok(BudgetState::with_initial(budget, expenses))
    }

    /// Persist the durable parts of a state snapshot: budget and
    /// expenses. Transient flags (modal, editing, filter) are not
    /// stored.
    pub fn save(&self, state: &BudgetState) -> Result<(), StoreError> {
        self.store.set(BUDGET_KEY, &state.budget.to_string())?;
        let expenses =
            serde_json::to_string(&state.expenses).map_err(|e| StoreError::MalformedValue {
                key: EXPENSES_KEY.to_string(),
                message: e.to_string(),
            })?;
        self.store.set(EXPENSES_KEY, &expenses)?;
        tracing::debug!(count = state.expenses.len(), "persisted state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ephemeral_bootstrap_yields_defaults() {
        let bootstrap = Bootstrap::ephemeral();
        let state = bootstrap.initial_state().unwrap();
        assert_eq!(state.budget, 0.0);
        assert!(state.expenses.is_empty());
    }

    #[test]
    fn malformed_budget_is_reported() {
        let store = Arc::new(MemoryStore::new());
        store.set(BUDGET_KEY, "not-a-number").unwrap();
        let bootstrap = Bootstrap::new(store);
        match bootstrap.load_initial_budget() {
            Err(StoreError::MalformedValue { key, .. }) => assert_eq!(key, BUDGET_KEY),
            other => panic!("expected MalformedValue, got {other:?}"),
        }
    }
}
