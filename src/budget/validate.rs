//! Pre-dispatch validation of expense form input.
//!
//! The store itself accepts any input; these are the checks the
//! presentation layer runs before dispatching an add or update, and
//! whose failures it surfaces as a transient message.

use thiserror::Error;

use super::types::DraftExpense;

/// Why a form submission was rejected before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,
    #[error("That expense exceeds the remaining budget")]
    OverBudget,
}

/// Check a draft against the two form rules.
///
/// `previous_amount` is the amount the expense had before editing
/// began; pass 0 for a brand-new expense. Only the net increase counts
/// against the remaining budget, so saving an edit that lowers the
/// amount always passes the budget check.
pub fn validate_draft(
    draft: &DraftExpense,
    remaining_budget: f64,
    previous_amount: f64,
) -> Result<(), ValidationError> {
    if draft.expense_name.trim().is_empty() || draft.category.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if draft.amount - previous_amount > remaining_budget {
        return Err(ValidationError::OverBudget);
    }
    Ok(())
}
