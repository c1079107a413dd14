//! Shared test utilities.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use spendtrack::budget::{BudgetReducer, BudgetState, DraftExpense, Expense};
use spendtrack::ids::{ExpenseIdGenerator, FixedIdGenerator};

/// Generator yielding "expense-1", "expense-2", ... in dispatch order.
pub struct SequenceIds {
    counter: AtomicU64,
}

impl SequenceIds {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }
}

impl ExpenseIdGenerator for SequenceIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("expense-{n}")
    }
}

/// Reducer whose add transition always assigns `id`.
pub fn reducer_with_fixed_id(id: &str) -> BudgetReducer {
    BudgetReducer::with_generator(Arc::new(FixedIdGenerator::new(id)))
}

/// Reducer assigning sequential ids.
pub fn reducer_with_sequence_ids() -> BudgetReducer {
    BudgetReducer::with_generator(Arc::new(SequenceIds::new()))
}

pub fn grocery_draft() -> DraftExpense {
    DraftExpense {
        expense_name: "Grocery".to_string(),
        amount: 50.0,
        category: "Food".to_string(),
        date: None,
    }
}

pub fn expense(id: &str, name: &str, amount: f64, category: &str) -> Expense {
    Expense {
        id: id.to_string(),
        expense_name: name.to_string(),
        amount,
        category: category.to_string(),
        date: None,
    }
}

/// State holding exactly one expense with id "1".
pub fn state_with_grocery() -> BudgetState {
    BudgetState {
        expenses: vec![expense("1", "Grocery", 50.0, "Food")],
        ..BudgetState::default()
    }
}
