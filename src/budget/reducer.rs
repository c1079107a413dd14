//! Reducer for budget state transitions.

use std::sync::Arc;

use crate::ids::{ExpenseIdGenerator, UuidGenerator};
use crate::store::Reducer;

use super::action::BudgetAction;
use super::state::BudgetState;
use super::types::Expense;

/// Reducer for the budget store.
///
/// Holds the injected id generator used by the add transition; swap in
/// a deterministic generator to make transitions reproducible in tests.
pub struct BudgetReducer {
    ids: Arc<dyn ExpenseIdGenerator>,
}

impl BudgetReducer {
    /// Reducer with the production (random UUID) id generator.
    pub fn new() -> Self {
        Self::with_generator(Arc::new(UuidGenerator))
    }

    /// Reducer with a caller-supplied id generator.
    pub fn with_generator(ids: Arc<dyn ExpenseIdGenerator>) -> Self {
        Self { ids }
    }
}

impl Default for BudgetReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for BudgetReducer {
    type State = BudgetState;
    type Action = BudgetAction;

    fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State {
        match action {
            BudgetAction::SetBudget { amount } => BudgetState {
                budget: amount,
                ..state
            },

            BudgetAction::ShowModal => BudgetState {
                modal: true,
                ..state
            },

            BudgetAction::CloseModal => BudgetState {
                modal: false,
                editing_id: None,
                ..state
            },

            BudgetAction::AddExpense { draft } => {
                let expense = Expense::from_draft(self.ids.next_id(), draft);
                let mut expenses = state.expenses;
                expenses.push(expense);
                BudgetState {
                    expenses,
                    modal: false,
                    ..state
                }
            }

            BudgetAction::RemoveExpense { id } => BudgetState {
                expenses: state
                    .expenses
                    .into_iter()
                    .filter(|e| e.id != id)
                    .collect(),
                ..state
            },

            BudgetAction::EditExpense { id } => BudgetState {
                editing_id: if id.is_empty() { None } else { Some(id) },
                modal: true,
                ..state
            },

            BudgetAction::UpdateExpense { expense } => BudgetState {
                expenses: state
                    .expenses
                    .into_iter()
                    .map(|e| {
                        if e.id == expense.id {
                            expense.clone()
                        } else {
                            e
                        }
                    })
                    .collect(),
                modal: false,
                editing_id: None,
                ..state
            },

            BudgetAction::ResetApp => BudgetState {
                budget: 0.0,
                expenses: Vec::new(),
                ..state
            },

            BudgetAction::FilterCategory { id } => BudgetState {
                current_category: if id.is_empty() { None } else { Some(id) },
                ..state
            },
        }
    }
}
