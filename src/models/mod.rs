//! Core data models for the expense tracker
//!
//! Expense rows, budget rows, money amounts and the time buckets used by
//! summary reports.

pub mod budget;
pub mod expense;
pub mod money;
pub mod period;

pub use budget::BudgetEntry;
pub use expense::Expense;
pub use money::{Money, MoneyParseError};
pub use period::{Granularity, Period};
