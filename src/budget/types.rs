//! Domain entities: categories and expenses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable reference entity describing an expense category.
///
/// Categories come from a fixed preloaded set; they are never created
/// or destroyed at runtime. Expenses reference them by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    /// Display name shown in selects and list rows.
    pub name: String,
    /// Visual asset reference (icon file stem, no extension).
    pub icon: String,
}

impl Category {
    /// Find a category by id in a slice.
    pub fn find_by_id<'a>(categories: &'a [Category], id: &str) -> Option<&'a Category> {
        categories.iter().find(|c| c.id == id)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The preloaded category set.
pub fn default_categories() -> Vec<Category> {
    fn cat(id: &str, name: &str, icon: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }

    vec![
        cat("1", "Savings", "icon_savings"),
        cat("2", "Food", "icon_food"),
        cat("3", "Home", "icon_home"),
        cat("4", "Miscellaneous", "icon_misc"),
        cat("5", "Leisure", "icon_leisure"),
        cat("6", "Health", "icon_health"),
        cat("7", "Subscriptions", "icon_subscriptions"),
    ]
}

/// Expense payload as entered in the form, before an identifier is
/// assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftExpense {
    pub expense_name: String,
    /// Expected ≥ 0; enforced by pre-dispatch validation, not here.
    pub amount: f64,
    /// Category id the expense is recorded against.
    pub category: String,
    /// Unset when the user has not picked a date.
    pub date: Option<NaiveDate>,
}

/// Persisted expense entity.
///
/// Created by the add transition (which assigns `id`), mutated only by
/// full replacement via the update transition, destroyed by remove or
/// by the global reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique, generator-assigned, immutable after creation.
    pub id: String,
    pub expense_name: String,
    pub amount: f64,
    pub category: String,
    pub date: Option<NaiveDate>,
}

impl Expense {
    /// Promote a draft to a persisted expense under the given id.
    pub fn from_draft(id: String, draft: DraftExpense) -> Self {
        Self {
            id,
            expense_name: draft.expense_name,
            amount: draft.amount,
            category: draft.category,
            date: draft.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_draft_preserves_fields() {
        let draft = DraftExpense {
            expense_name: "Rent".to_string(),
            amount: 800.0,
            category: "3".to_string(),
            date: None,
        };
        let expense = Expense::from_draft("abc".to_string(), draft.clone());
        assert_eq!(expense.id, "abc");
        assert_eq!(expense.expense_name, draft.expense_name);
        assert_eq!(expense.amount, draft.amount);
        assert_eq!(expense.category, draft.category);
        assert_eq!(expense.date, draft.date);
    }

    #[test]
    fn default_categories_have_unique_ids() {
        let categories = default_categories();
        for (i, a) in categories.iter().enumerate() {
            for b in &categories[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn find_by_id_hits_and_misses() {
        let categories = default_categories();
        assert_eq!(
            Category::find_by_id(&categories, "2").map(|c| c.name.as_str()),
            Some("Food")
        );
        assert!(Category::find_by_id(&categories, "99").is_none());
    }
}
