//! Budget and expense tracking core.
//!
//! The crate is the state-keeping heart of a budget tracker: a user
//! sets a budget, records expenses against categories, edits and
//! deletes them, filters by category, and sees running totals. All of
//! that lives in a single pure reducer; rendering is someone else's
//! job.
//!
//! # Layout
//!
//! - [`store`] — generic store primitives: state/action/reducer traits
//!   and the owning [`store::Store`] handle
//! - [`budget`] — the budget domain: entities, [`budget::BudgetState`],
//!   [`budget::BudgetAction`], the reducer, and pre-dispatch validation
//! - [`ids`] — expense id generation, injectable for tests
//! - [`persist`] — durable key-value storage and the startup bootstrap
//! - [`format`] — amount and date display helpers
//!
//! # Example
//!
//! ```
//! use spendtrack::budget::{BudgetAction, BudgetReducer, BudgetStore, DraftExpense};
//! use spendtrack::persist::Bootstrap;
//!
//! let bootstrap = Bootstrap::ephemeral();
//! let initial = bootstrap.initial_state().expect("in-memory load cannot fail");
//! let store = BudgetStore::new(initial, BudgetReducer::new());
//!
//! store.dispatch(BudgetAction::SetBudget { amount: 1000.0 });
//! store.dispatch(BudgetAction::AddExpense {
//!     draft: DraftExpense {
//!         expense_name: "Grocery".to_string(),
//!         amount: 50.0,
//!         category: "2".to_string(),
//!         date: None,
//!     },
//! });
//!
//! let state = store.get();
//! assert_eq!(state.remaining_budget(), 950.0);
//! ```

pub mod budget;
pub mod format;
pub mod ids;
pub mod persist;
pub mod store;
