//! Budget repository for CSV storage
//!
//! Reads and writes `budget.csv`.

use std::path::PathBuf;

use crate::error::TrackerResult;
use crate::models::BudgetEntry;

use super::file_io::{create_with_header, read_csv, write_csv_atomic};

/// Column layout of `budget.csv`
pub const BUDGET_HEADER: [&str; 2] = ["Category", "Budget"];

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Create the file with just its header if it's missing
    pub fn ensure_exists(&self) -> TrackerResult<bool> {
        create_with_header(&self.path, &BUDGET_HEADER)
    }

    /// Load every budget entry, in file order
    pub fn load(&self) -> TrackerResult<Vec<BudgetEntry>> {
        read_csv(&self.path, &BUDGET_HEADER)
    }

    /// Replace the file with `entries`
    pub fn save(&self, entries: &[BudgetEntry]) -> TrackerResult<()> {
        write_csv_atomic(&self.path, &BUDGET_HEADER, entries)
    }

    /// Look up the budget for a category
    pub fn get(&self, category: &str) -> TrackerResult<Option<BudgetEntry>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|entry| entry.category == category))
    }
}
