//! Time buckets for summary reports
//!
//! A period is either a calendar month or a zero-indexed week of the year.
//! Week 0 holds the days before the first week-start day of the year, the
//! same numbering strftime uses for `%U` (Sunday start) and `%W` (Monday start).

use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

/// How expenses are bucketed in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Monthly,
    /// Weekly, with weeks beginning on the given day
    Weekly(Weekday),
}

/// A summary bucket
///
/// Ordering is chronological within one variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Period {
    /// Calendar month (e.g., "2025-01")
    Monthly { year: i32, month: u32 },

    /// Zero-indexed week of the year (e.g., "2025 Week 03")
    Weekly { year: i32, week: u32 },
}

impl Period {
    pub fn monthly(year: i32, month: u32) -> Self {
        Self::Monthly { year, month }
    }

    pub fn weekly(year: i32, week: u32) -> Self {
        Self::Weekly { year, week }
    }

    /// The bucket a date falls into at the given granularity
    pub fn for_date(date: NaiveDate, granularity: Granularity) -> Self {
        match granularity {
            Granularity::Monthly => Self::month_of(date),
            Granularity::Weekly(week_start) => Self::week_of(date, week_start),
        }
    }

    /// The calendar month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        Self::Monthly {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The zero-indexed week of the year containing `date`
    pub fn week_of(date: NaiveDate, week_start: Weekday) -> Self {
        let days_into_week = (date.weekday().num_days_from_monday() + 7
            - week_start.num_days_from_monday())
            % 7;
        let week = (date.ordinal0() + 7 - days_into_week) / 7;

        Self::Weekly {
            year: date.year(),
            week,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Weekly { year, week } => write!(f, "{:04} Week {:02}", year, week),
        }
    }
}
