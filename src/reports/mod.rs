//! Reports module for the expense tracker
//!
//! Read-only views over the datasets: period-by-category summaries, the
//! budget comparison, and per-category spending shares.

pub mod budget_comparison;
pub mod spending;
pub mod summary;

pub use budget_comparison::{BudgetComparisonReport, BudgetComparisonRow, BudgetStatus};
pub use spending::{SpendingByCategory, SpendingReport};
pub use summary::{SummaryReport, SummaryRow};
