//! Expense repository for CSV storage
//!
//! Reads and writes `expenses.csv`. The repository keeps no rows in memory:
//! callers load the full table, change it, and save it back.

use std::path::PathBuf;

use crate::error::TrackerResult;
use crate::models::Expense;

use super::file_io::{create_with_header, read_csv, write_csv_atomic};

/// Column layout of `expenses.csv`
pub const EXPENSE_HEADER: [&str; 4] = ["Date", "Category", "Amount", "Note"];

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Create the file with just its header if it's missing
    pub fn ensure_exists(&self) -> TrackerResult<bool> {
        create_with_header(&self.path, &EXPENSE_HEADER)
    }

    /// Load every expense, in file order
    pub fn load(&self) -> TrackerResult<Vec<Expense>> {
        read_csv(&self.path, &EXPENSE_HEADER)
    }

    /// Replace the file with `expenses`
    pub fn save(&self, expenses: &[Expense]) -> TrackerResult<()> {
        write_csv_atomic(&self.path, &EXPENSE_HEADER, expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.csv"));
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_file_has_header_only() {
        let (_temp_dir, repo) = repo();
        repo.ensure_exists().unwrap();

        assert_eq!(
            fs::read_to_string(repo.path()).unwrap(),
            "Date,Category,Amount,Note\n"
        );
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_preserves_rows_and_order() {
        let (_temp_dir, repo) = repo();
        let jan = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let expenses = vec![
            Expense::new(jan, "Food", Money::from_cents(10000)).with_note("groceries, weekly"),
            Expense::new(jan, "Food", Money::from_cents(10000)),
            Expense::new(jan, "Refund", Money::from_cents(-2550)),
        ];

        repo.save(&expenses).unwrap();
        assert_eq!(repo.load().unwrap(), expenses);
    }

    #[test]
    fn test_load_accepts_exponent_amounts() {
        let (_temp_dir, repo) = repo();
        fs::write(
            repo.path(),
            "Date,Category,Amount,Note\n2024-01-01,Food,1e3,\n2024-01-02,Food,1e-05,\n",
        )
        .unwrap();

        let expenses = repo.load().unwrap();
        assert_eq!(expenses[0].amount, Money::from_cents(100000));
        assert_eq!(expenses[1].amount, Money::zero());
    }

    #[test]
    fn test_file_format() {
        let (_temp_dir, repo) = repo();
        let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        repo.save(&[Expense::new(date, "Food", Money::from_cents(3000))])
            .unwrap();

        assert_eq!(
            fs::read_to_string(repo.path()).unwrap(),
            "Date,Category,Amount,Note\n2024-02-05,Food,30.00,\n"
        );
    }

    #[test]
    fn test_reads_float_amounts_and_timestamps() {
        let (_temp_dir, repo) = repo();
        fs::write(
            repo.path(),
            "Date,Category,Amount,Note\n2024-01-05 13:45:12.123456,Food,100.0,\n",
        )
        .unwrap();

        let expenses = repo.load().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(expenses[0].amount, Money::from_cents(10000));
        assert_eq!(expenses[0].note, "");
    }

    #[test]
    fn test_unparseable_date_is_corrupt() {
        let (_temp_dir, repo) = repo();
        fs::write(repo.path(), "Date,Category,Amount,Note\nyesterday,Food,1,\n").unwrap();

        assert!(repo.load().unwrap_err().is_corrupt());
    }

    #[test]
    fn test_unparseable_amount_is_corrupt() {
        let (_temp_dir, repo) = repo();
        fs::write(repo.path(), "Date,Category,Amount,Note\n2024-01-01,Food,lots,\n").unwrap();

        assert!(repo.load().unwrap_err().is_corrupt());
    }
}
