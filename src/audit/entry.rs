//! Audit entry data structures
//!
//! One entry per row added to or replaced in a dataset, carrying the row's
//! contents before and after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened to the row
///
/// Rows are never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Change {
    Added,
    Replaced,
}

/// Which CSV file the row lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Expenses,
    Budgets,
}

/// A single line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub change: Change,
    pub dataset: Dataset,

    /// 1-based row number for expenses, the category for budgets
    pub key: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// e.g. "budget: 120.00 -> 90.00"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    /// A row appended to `dataset`
    pub fn added<T: Serialize>(dataset: Dataset, key: impl Into<String>, row: &T) -> Self {
        Self {
            timestamp: Utc::now(),
            change: Change::Added,
            dataset,
            key: key.into(),
            before: None,
            after: serde_json::to_value(row).ok(),
            summary: None,
        }
    }

    /// A row overwritten in place
    pub fn replaced<T: Serialize>(
        dataset: Dataset,
        key: impl Into<String>,
        before: &T,
        after: &T,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            change: Change::Replaced,
            dataset,
            key: key.into(),
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            summary: Some(summary.into()),
        }
    }
}
