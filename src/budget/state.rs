//! Budget state: the aggregate root owned by the store.

use serde::{Deserialize, Serialize};

use crate::store::StoreState;

use super::types::Expense;

/// All tracked budget data plus the declarative UI flags the
/// presentation layer renders from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetState {
    /// Total allowance. Set verbatim by the set-budget transition;
    /// exactly 0 after reset.
    pub budget: f64,
    /// Whether the expense form modal is open.
    pub modal: bool,
    /// Insertion-ordered; order is what the list displays.
    pub expenses: Vec<Expense>,
    /// Id of the expense currently being edited, if any.
    pub editing_id: Option<String>,
    /// Active category filter, if any. Does not alter stored data.
    pub current_category: Option<String>,
}

impl StoreState for BudgetState {}

impl BudgetState {
    /// State as loaded at startup: persisted budget and expenses, all
    /// transient flags cleared.
    pub fn with_initial(budget: f64, expenses: Vec<Expense>) -> Self {
        Self {
            budget,
            expenses,
            ..Self::default()
        }
    }

    /// Sum of all expense amounts.
    ///
    /// Always computed over the full sequence; the category filter
    /// only affects what the list displays, never the totals.
    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// What is left of the budget after all expenses.
    pub fn remaining_budget(&self) -> f64 {
        self.budget - self.total_expenses()
    }

    /// Share of the budget already spent, as a percentage.
    ///
    /// 0 when no budget is set, so progress displays have a defined
    /// value to render.
    pub fn percent_spent(&self) -> f64 {
        if self.budget == 0.0 {
            return 0.0;
        }
        self.total_expenses() / self.budget * 100.0
    }

    /// The expenses the list should display: all of them, or those
    /// matching the active category filter.
    pub fn filtered_expenses(&self) -> Vec<&Expense> {
        match &self.current_category {
            Some(category) => self
                .expenses
                .iter()
                .filter(|e| &e.category == category)
                .collect(),
            None => self.expenses.iter().collect(),
        }
    }

    /// The expense referenced by `editing_id`, for pre-filling the
    /// form. None when not editing or when the id has gone stale.
    pub fn editing_expense(&self) -> Option<&Expense> {
        let id = self.editing_id.as_ref()?;
        self.expenses.iter().find(|e| &e.id == id)
    }

    /// True while an existing expense is being edited rather than a
    /// new one created.
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, amount: f64, category: &str) -> Expense {
        Expense {
            id: id.to_string(),
            expense_name: format!("expense {id}"),
            amount,
            category: category.to_string(),
            date: None,
        }
    }

    fn state_with(expenses: Vec<Expense>) -> BudgetState {
        BudgetState {
            budget: 1000.0,
            expenses,
            ..BudgetState::default()
        }
    }

    #[test]
    fn totals_sum_all_expenses() {
        let state = state_with(vec![expense("1", 50.0, "2"), expense("2", 150.0, "3")]);
        assert_eq!(state.total_expenses(), 200.0);
        assert_eq!(state.remaining_budget(), 800.0);
        assert_eq!(state.percent_spent(), 20.0);
    }

    #[test]
    fn totals_ignore_active_filter() {
        let mut state = state_with(vec![expense("1", 50.0, "2"), expense("2", 150.0, "3")]);
        state.current_category = Some("2".to_string());
        assert_eq!(state.total_expenses(), 200.0);
        assert_eq!(state.remaining_budget(), 800.0);
    }

    #[test]
    fn percent_spent_is_zero_without_budget() {
        let state = BudgetState::default();
        assert_eq!(state.percent_spent(), 0.0);
    }

    #[test]
    fn filtered_expenses_respects_category() {
        let mut state = state_with(vec![expense("1", 50.0, "2"), expense("2", 150.0, "3")]);
        assert_eq!(state.filtered_expenses().len(), 2);

        state.current_category = Some("3".to_string());
        let filtered = state.filtered_expenses();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");
    }

    #[test]
    fn editing_expense_resolves_current_id() {
        let mut state = state_with(vec![expense("1", 50.0, "2")]);
        assert!(state.editing_expense().is_none());
        assert!(!state.is_editing());

        state.editing_id = Some("1".to_string());
        assert!(state.is_editing());
        assert_eq!(state.editing_expense().map(|e| e.id.as_str()), Some("1"));

        // Stale id: referenced expense no longer exists
        state.editing_id = Some("gone".to_string());
        assert!(state.editing_expense().is_none());
    }

    #[test]
    fn with_initial_clears_transient_flags() {
        let state = BudgetState::with_initial(500.0, vec![expense("1", 50.0, "2")]);
        assert_eq!(state.budget, 500.0);
        assert_eq!(state.expenses.len(), 1);
        assert!(!state.modal);
        assert!(state.editing_id.is_none());
        assert!(state.current_category.is_none());
    }
}
