//! Storage layer for the expense tracker
//!
//! Two CSV datasets under the data directory, rewritten whole on every change
//! with atomic renames. There is no locking: each operation reads the full
//! file, changes it, and writes it back, so the last writer wins.

pub mod budget;
pub mod expenses;
pub mod file_io;
pub mod init;

pub use budget::{BudgetRepository, BUDGET_HEADER};
pub use expenses::{ExpenseRepository, EXPENSE_HEADER};
pub use init::initialize_storage;

use crate::audit::{AuditLogger, AuditSession};
use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;

/// Main storage coordinator that provides access to both repositories
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with audit logging enabled
    ///
    /// Nothing is written until [`Storage::ensure_initialized`] or a save.
    pub fn new(paths: TrackerPaths) -> Self {
        Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            budgets: BudgetRepository::new(paths.budget_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        }
    }

    /// Turn audit logging on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit = enabled.then(|| AuditLogger::new(self.paths.audit_log()));
        self
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Create the directories and any missing dataset file
    pub fn ensure_initialized(&self) -> Result<(), TrackerError> {
        initialize_storage(&self.paths)
    }

    /// Open the audit log ahead of a dataset write
    ///
    /// `None` when auditing is off. Call before saving so that an unwritable
    /// log aborts the operation with the dataset untouched.
    pub fn begin_audit(&self) -> Result<Option<AuditSession>, TrackerError> {
        self.audit.as_ref().map(AuditLogger::open).transpose()
    }
}
