//! Summary Report
//!
//! Expense totals pivoted into a period-by-category table, by month or by
//! week. Cells with no expenses are zero.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Weekday;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Granularity, Money, Period};
use crate::storage::Storage;

use super::spending::accumulate;

/// One row of the pivot: a period and its amount for every category
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub period: Period,
    /// Aligned with [`SummaryReport::categories`]
    pub amounts: Vec<Money>,
}

/// Summary Report
#[derive(Debug, Clone)]
pub struct SummaryReport {
    pub granularity: Granularity,
    /// Column labels, sorted
    pub categories: Vec<String>,
    /// Rows in chronological order
    pub rows: Vec<SummaryRow>,
}

impl SummaryReport {
    /// Totals by calendar month and category
    pub fn monthly(storage: &Storage) -> TrackerResult<Self> {
        Self::from_expenses(&storage.expenses.load()?, Granularity::Monthly)
    }

    /// Totals by week of the year and category
    pub fn weekly(storage: &Storage, week_start: Weekday) -> TrackerResult<Self> {
        Self::from_expenses(&storage.expenses.load()?, Granularity::Weekly(week_start))
    }

    /// Build the pivot from a set of expenses
    ///
    /// Fails with `NoData` when there are no expenses.
    pub fn from_expenses(expenses: &[Expense], granularity: Granularity) -> TrackerResult<Self> {
        if expenses.is_empty() {
            return Err(TrackerError::NoData("No expenses found.".into()));
        }

        let mut cells: BTreeMap<(Period, &str), Money> = BTreeMap::new();
        let mut categories: BTreeSet<&str> = BTreeSet::new();

        for expense in expenses {
            let period = Period::for_date(expense.date, granularity);
            let cell = cells
                .entry((period, expense.category.as_str()))
                .or_default();
            accumulate(cell, expense.amount, &expense.category)?;
            categories.insert(expense.category.as_str());
        }

        let periods: BTreeSet<Period> = cells.keys().map(|(period, _)| period.clone()).collect();

        let rows = periods
            .into_iter()
            .map(|period| {
                let amounts = categories
                    .iter()
                    .map(|category| {
                        cells
                            .get(&(period.clone(), *category))
                            .copied()
                            .unwrap_or_default()
                    })
                    .collect();
                SummaryRow { period, amounts }
            })
            .collect();

        Ok(Self {
            granularity,
            categories: categories.into_iter().map(String::from).collect(),
            rows,
        })
    }

    /// The total for one cell, zero if nothing was spent
    pub fn amount(&self, period: &Period, category: &str) -> Money {
        let Some(column) = self.categories.iter().position(|c| c == category) else {
            return Money::zero();
        };
        self.rows
            .iter()
            .find(|row| &row.period == period)
            .map(|row| row.amounts[column])
            .unwrap_or_default()
    }

    /// Title shown above the table
    pub fn title(&self) -> &'static str {
        match self.granularity {
            Granularity::Monthly => "Monthly Expense Summary",
            Granularity::Weekly(_) => "Weekly Expense Summary",
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut builder = Builder::default();

        let period_label = match self.granularity {
            Granularity::Monthly => "Month",
            Granularity::Weekly(_) => "Week",
        };
        builder.push_record(
            std::iter::once(period_label.to_string()).chain(self.categories.iter().cloned()),
        );

        for row in &self.rows {
            builder.push_record(
                std::iter::once(row.period.to_string())
                    .chain(row.amounts.iter().map(|amount| amount.to_string())),
            );
        }

        let mut table = builder.build();
        table
            .with(Style::psql())
            .modify(Columns::new(1..), Alignment::right());
        table.to_string()
    }
}
