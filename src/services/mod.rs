//! Service layer for the expense tracker
//!
//! Services own the read-modify-write cycle against storage, validation of
//! new rows, and audit logging.

pub mod budget;
pub mod expense;
pub mod visualization;

pub use budget::BudgetService;
pub use expense::ExpenseService;
pub use visualization::VisualizationService;
