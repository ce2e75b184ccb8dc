//! Budget model
//!
//! One row of `budget.csv`: a monthly spending limit for a category.
//! Categories are unique within the table.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A monthly budget for a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BudgetEntry {
    /// Category the budget applies to
    pub category: String,

    /// Monthly amount
    pub budget: Money,
}

impl BudgetEntry {
    pub fn new(category: impl Into<String>, budget: Money) -> Self {
        Self {
            category: category.into(),
            budget,
        }
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), String> {
        if self.category.trim().is_empty() {
            return Err("Category cannot be empty".into());
        }
        Ok(())
    }
}

/// Insert `entry`, or overwrite the amount of the existing entry with the
/// same category in place. Returns the previous amount if there was one.
pub fn upsert(entries: &mut Vec<BudgetEntry>, entry: BudgetEntry) -> Option<Money> {
    match entries.iter_mut().find(|e| e.category == entry.category) {
        Some(existing) => {
            let previous = existing.budget;
            existing.budget = entry.budget;
            Some(previous)
        }
        None => {
            entries.push(entry);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_appends_new_category() {
        let mut entries = vec![BudgetEntry::new("Food", Money::from_cents(12000))];
        let previous = upsert(&mut entries, BudgetEntry::new("Rent", Money::from_cents(50000)));

        assert_eq!(previous, None);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].category, "Rent");
    }

    #[test]
    fn test_upsert_overwrites_in_place() {
        let mut entries = vec![
            BudgetEntry::new("Food", Money::from_cents(12000)),
            BudgetEntry::new("Rent", Money::from_cents(50000)),
        ];
        let previous = upsert(&mut entries, BudgetEntry::new("Food", Money::from_cents(9000)));

        assert_eq!(previous, Some(Money::from_cents(12000)));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], BudgetEntry::new("Food", Money::from_cents(9000)));
    }

    #[test]
    fn test_category_match_is_exact() {
        let mut entries = vec![BudgetEntry::new("Food", Money::from_cents(100))];
        upsert(&mut entries, BudgetEntry::new("food", Money::from_cents(200)));
        assert_eq!(entries.len(), 2);
    }
}
