//! Expense service
//!
//! Appends new expenses to the ledger.

use chrono::NaiveDate;

use crate::audit::{AuditEntry, Dataset};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Service for recording expenses
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record one expense
    ///
    /// `date` defaults to today's local date. Amounts are not range-checked;
    /// negative values are stored as given.
    pub fn log_expense(
        &self,
        date: Option<NaiveDate>,
        category: &str,
        amount: Money,
        note: Option<&str>,
    ) -> TrackerResult<Expense> {
        let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
        let expense = Expense::new(date, category.trim(), amount).with_note(note.unwrap_or("").trim());

        expense.validate().map_err(TrackerError::Validation)?;

        let mut audit = self.storage.begin_audit()?;

        let mut expenses = self.storage.expenses.load()?;
        expenses.push(expense.clone());
        self.storage.expenses.save(&expenses)?;

        if let Some(session) = audit.as_mut() {
            session.record(&AuditEntry::added(
                Dataset::Expenses,
                expenses.len().to_string(),
                &expense,
            ))?;
        }

        Ok(expense)
    }
}
