//! Storage initialization
//!
//! Creates the data directory and both dataset files on first run.

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

use super::budget::BudgetRepository;
use super::expenses::ExpenseRepository;

/// Make sure the directories and both CSV files exist
///
/// Missing files are created with only their header row. Existing files are
/// never touched, so this is safe to run on every start.
pub fn initialize_storage(paths: &TrackerPaths) -> Result<(), TrackerError> {
    paths.ensure_directories()?;

    ExpenseRepository::new(paths.expenses_file()).ensure_exists()?;
    BudgetRepository::new(paths.budget_file()).ensure_exists()?;

    Ok(())
}
