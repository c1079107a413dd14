//! Budget and expense tracking domain.
//!
//! The reducer here is the only place budget data changes. The
//! presentation layer reads [`BudgetState`] snapshots, runs the
//! [`validate`] checks on form input, and dispatches [`BudgetAction`]s
//! through a [`BudgetStore`].

mod action;
mod reducer;
mod state;
mod types;
pub mod validate;

pub use action::BudgetAction;
pub use reducer::BudgetReducer;
pub use state::BudgetState;
pub use types::{default_categories, Category, DraftExpense, Expense};

use crate::store::Store;

/// Store handle specialized to the budget reducer.
pub type BudgetStore = Store<BudgetReducer>;
