//! Spending Report
//!
//! Lifetime spending per category with each category's share of the total.

use std::collections::BTreeMap;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Money};
use crate::storage::Storage;

/// Spending for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    pub category: String,
    /// Sum of all expense amounts in this category
    pub total: Money,
    /// Share of the overall total, 0-100 (zero when the overall total isn't positive)
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// One row per category, sorted by category
    pub categories: Vec<SpendingByCategory>,
    /// Sum over every expense
    pub total: Money,
}

/// Add `amount` to a running total
///
/// Fails with a validation error naming `label` when the sum no longer fits.
pub(crate) fn accumulate(total: &mut Money, amount: Money, label: &str) -> TrackerResult<()> {
    *total = total.checked_add(amount).ok_or_else(|| {
        TrackerError::Validation(format!("Total for {} is too large to compute", label))
    })?;
    Ok(())
}

/// Sum amounts per category, keyed in category order
pub fn category_totals(expenses: &[Expense]) -> TrackerResult<BTreeMap<String, Money>> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        let total = totals.entry(expense.category.clone()).or_default();
        accumulate(total, expense.amount, &expense.category)?;
    }
    Ok(totals)
}

impl SpendingReport {
    /// Generate the report from the stored expenses
    pub fn generate(storage: &Storage) -> TrackerResult<Self> {
        Self::from_expenses(&storage.expenses.load()?)
    }

    /// Generate the report from a set of expenses
    ///
    /// Fails with `NoData` when there are no expenses.
    pub fn from_expenses(expenses: &[Expense]) -> TrackerResult<Self> {
        if expenses.is_empty() {
            return Err(TrackerError::NoData("No expenses to show.".into()));
        }

        let totals = category_totals(expenses)?;
        let mut total = Money::zero();
        for amount in totals.values() {
            accumulate(&mut total, *amount, "all categories")?;
        }

        let categories = totals
            .into_iter()
            .map(|(category, amount)| SpendingByCategory {
                category,
                total: amount,
                percentage: if total.is_positive() {
                    amount.as_f64() / total.as_f64() * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        Ok(Self { categories, total })
    }
}
