//! Budget service
//!
//! Sets the monthly budget for a category.

use crate::audit::{AuditEntry, Dataset};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{budget, BudgetEntry, Money};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the monthly budget for a category
    ///
    /// Overwrites the amount in place when the category already has a budget,
    /// otherwise appends a new row.
    pub fn set_budget(&self, category: &str, amount: Money) -> TrackerResult<BudgetEntry> {
        let entry = BudgetEntry::new(category.trim(), amount);
        entry.validate().map_err(TrackerError::Validation)?;

        let mut audit = self.storage.begin_audit()?;

        let mut entries = self.storage.budgets.load()?;
        let previous = budget::upsert(&mut entries, entry.clone());
        self.storage.budgets.save(&entries)?;

        if let Some(session) = audit.as_mut() {
            let record = match previous {
                Some(old) => AuditEntry::replaced(
                    Dataset::Budgets,
                    entry.category.clone(),
                    &BudgetEntry::new(entry.category.clone(), old),
                    &entry,
                    format!("budget: {} -> {}", old, entry.budget),
                ),
                None => AuditEntry::added(Dataset::Budgets, entry.category.clone(), &entry),
            };
            session.record(&record)?;
        }

        Ok(entry)
    }
}
