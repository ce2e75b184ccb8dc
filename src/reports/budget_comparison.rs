//! Budget Comparison Report
//!
//! Compares each category's lifetime spending against its monthly budget.
//! Only categories with at least one expense appear; budgets for categories
//! nobody has spent in are left out.

use std::collections::HashMap;
use std::fmt;

use crate::error::TrackerResult;
use crate::models::{BudgetEntry, Expense, Money};
use crate::storage::Storage;

use super::spending::category_totals;

/// How a category's spending relates to its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// Total is strictly greater than the budget
    OverBudget,
    WithinBudget,
    NoBudgetSet,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverBudget => write!(f, "Over budget"),
            Self::WithinBudget => write!(f, "Within budget"),
            Self::NoBudgetSet => write!(f, "No budget set"),
        }
    }
}

/// One category in the comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetComparisonRow {
    pub category: String,
    pub total: Money,
    pub budget: Option<Money>,
    pub status: BudgetStatus,
}

impl BudgetComparisonRow {
    fn new(category: String, total: Money, budget: Option<Money>) -> Self {
        let status = match budget {
            Some(limit) if total > limit => BudgetStatus::OverBudget,
            Some(_) => BudgetStatus::WithinBudget,
            None => BudgetStatus::NoBudgetSet,
        };
        Self {
            category,
            total,
            budget,
            status,
        }
    }

    /// Format as a single line, with amounts prefixed by `symbol`
    pub fn format_line(&self, symbol: &str) -> String {
        let total = self.total.format_with_symbol(symbol);
        match (self.status, self.budget) {
            (BudgetStatus::OverBudget, Some(budget)) => format!(
                "⚠️ Over budget in {}: {} / {}",
                self.category,
                total,
                budget.format_with_symbol(symbol)
            ),
            (_, Some(budget)) => format!(
                "{}: {} / {}",
                self.category,
                total,
                budget.format_with_symbol(symbol)
            ),
            (_, None) => format!("{}: {} (no budget set)", self.category, total),
        }
    }
}

/// Budget Comparison Report
#[derive(Debug, Clone)]
pub struct BudgetComparisonReport {
    /// Sorted by category
    pub rows: Vec<BudgetComparisonRow>,
}

impl BudgetComparisonReport {
    /// Generate the comparison from stored expenses and budgets
    pub fn generate(storage: &Storage) -> TrackerResult<Self> {
        let expenses = storage.expenses.load()?;
        let budgets = storage.budgets.load()?;
        Self::from_data(&expenses, &budgets)
    }

    /// Build the comparison from in-memory rows
    pub fn from_data(expenses: &[Expense], budgets: &[BudgetEntry]) -> TrackerResult<Self> {
        let limits: HashMap<&str, Money> = budgets
            .iter()
            .map(|entry| (entry.category.as_str(), entry.budget))
            .collect();

        let rows = category_totals(expenses)?
            .into_iter()
            .map(|(category, total)| {
                let budget = limits.get(category.as_str()).copied();
                BudgetComparisonRow::new(category, total, budget)
            })
            .collect();

        Ok(Self { rows })
    }

    /// Look up one category's row
    pub fn row(&self, category: &str) -> Option<&BudgetComparisonRow> {
        self.rows.iter().find(|row| row.category == category)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        self.rows
            .iter()
            .map(|row| row.format_line(symbol))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
