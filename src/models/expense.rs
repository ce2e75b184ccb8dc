//! Expense model
//!
//! One row of `expenses.csv`. Rows have no key; identity is their position in
//! the file and duplicates are allowed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Expense {
    /// Day the money was spent
    #[serde(with = "csv_date")]
    pub date: NaiveDate,

    /// Free-text category label
    pub category: String,

    /// Amount spent (not required to be positive)
    pub amount: Money,

    /// Optional note; empty when not given
    #[serde(default)]
    pub note: String,
}

impl Expense {
    /// Create a new expense without a note
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            note: String::new(),
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), String> {
        if self.category.trim().is_empty() {
            return Err("Category cannot be empty".into());
        }
        Ok(())
    }
}

/// Dates are written as `YYYY-MM-DD`. Reading also accepts a full timestamp
/// (`YYYY-MM-DD HH:MM:SS[.fff]` or with a `T` separator) and keeps the date.
mod csv_date {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";
    const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(raw.trim()).ok_or_else(|| de::Error::custom(format!("invalid date '{}'", raw)))
    }

    pub fn parse(s: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(s, DATE_FORMAT).ok().or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
    }
}
