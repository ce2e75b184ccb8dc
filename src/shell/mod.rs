//! Interactive menu shell
//!
//! Reads a menu choice per line, prompts for the fields the chosen operation
//! needs, runs it, and goes back to the menu. Input parse errors and empty
//! datasets are reported and the loop continues; storage failures end the
//! session.

pub mod prompt;

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::section_header;
use crate::error::{TrackerError, TrackerResult};
use crate::reports::{BudgetComparisonReport, SummaryReport};
use crate::services::{BudgetService, ExpenseService, VisualizationService};
use crate::storage::Storage;
use crate::tui::{ChartRenderer, TextChart};

use prompt::{parse_amount, parse_date, prompt_string, read_line};

const MENU: &str = "\
Expense Tracker Menu
1. Log Expense
2. Set Budget
3. View Monthly Summary
4. View Weekly Summary
5. Visualize Spending
6. Export Data
7. Exit";

/// Where the shell is in its loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    MenuDisplayed,
    AwaitingInput,
    Exiting,
}

/// A menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    LogExpense,
    SetBudget,
    MonthlySummary,
    WeeklySummary,
    Visualize,
    Export,
    Exit,
}

impl MenuChoice {
    /// Match a raw input line exactly
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Self::LogExpense),
            "2" => Some(Self::SetBudget),
            "3" => Some(Self::MonthlySummary),
            "4" => Some(Self::WeeklySummary),
            "5" => Some(Self::Visualize),
            "6" => Some(Self::Export),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The interactive session
pub struct Shell<'a, R: BufRead, W: Write> {
    storage: &'a Storage,
    settings: &'a Settings,
    input: R,
    out: W,
    renderer: Option<Box<dyn ChartRenderer + 'a>>,
    state: ShellState,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell that draws charts as text on its own output
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, out: W) -> Self {
        Self {
            storage,
            settings,
            input,
            out,
            renderer: None,
            state: ShellState::MenuDisplayed,
        }
    }

    /// Use `renderer` for the spending chart
    pub fn with_renderer(mut self, renderer: Box<dyn ChartRenderer + 'a>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// Give back the output writer
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> TrackerResult<()> {
        self.storage.ensure_initialized()?;

        while self.state != ShellState::Exiting {
            self.step()?;
        }
        Ok(())
    }

    /// Show the menu, read one choice and act on it
    pub fn step(&mut self) -> TrackerResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", MENU)?;
        self.state = ShellState::AwaitingInput;

        let line = match read_line(&mut self.input, &mut self.out, "Choose an option: ")? {
            Some(line) => line,
            None => {
                writeln!(self.out)?;
                return self.exit();
            }
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Exit) => return self.exit(),
            Some(choice) => {
                let result = self.dispatch(choice);
                self.report(result)?;
            }
            None => writeln!(self.out, "Invalid choice. Try again.")?,
        }

        self.state = ShellState::MenuDisplayed;
        Ok(())
    }

    fn exit(&mut self) -> TrackerResult<()> {
        writeln!(self.out, "Goodbye!")?;
        self.state = ShellState::Exiting;
        Ok(())
    }

    /// Print recoverable errors; pass the rest up
    fn report(&mut self, result: TrackerResult<()>) -> TrackerResult<()> {
        match result {
            Ok(()) => Ok(()),
            Err(TrackerError::NoData(message)) => {
                writeln!(self.out, "{}", message)?;
                Ok(())
            }
            Err(TrackerError::Validation(message))
            | Err(TrackerError::Audit(message))
            | Err(TrackerError::Tui(message)) => {
                writeln!(self.out, "Error: {}", message)?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> TrackerResult<()> {
        match choice {
            MenuChoice::LogExpense => self.log_expense(),
            MenuChoice::SetBudget => self.set_budget(),
            MenuChoice::MonthlySummary => self.monthly_summary(),
            MenuChoice::WeeklySummary => self.weekly_summary(),
            MenuChoice::Visualize => self.visualize(),
            MenuChoice::Export => self.export(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn ask(&mut self, prompt: &str) -> TrackerResult<String> {
        prompt_string(&mut self.input, &mut self.out, prompt)
    }

    fn log_expense(&mut self) -> TrackerResult<()> {
        let date = parse_date(&self.ask("Enter date (YYYY-MM-DD) or leave blank for today: ")?)?;
        let category = self.ask("Enter category: ")?;
        let amount = parse_amount(&self.ask("Enter amount: ")?)?;
        let note = self.ask("Optional note: ")?;

        ExpenseService::new(self.storage).log_expense(date, &category, amount, Some(&note))?;
        writeln!(self.out, "Expense logged successfully.")?;
        Ok(())
    }

    fn set_budget(&mut self) -> TrackerResult<()> {
        let category = self.ask("Enter category to set/update budget: ")?;
        let amount = parse_amount(&self.ask("Enter monthly budget amount: ")?)?;

        BudgetService::new(self.storage).set_budget(&category, amount)?;
        writeln!(self.out, "Budget saved.")?;
        Ok(())
    }

    fn print_summary(&mut self, report: &SummaryReport) -> TrackerResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", section_header(report.title()))?;
        writeln!(self.out, "{}", report.format_terminal())?;
        Ok(())
    }

    fn monthly_summary(&mut self) -> TrackerResult<()> {
        let report = SummaryReport::monthly(self.storage)?;
        self.print_summary(&report)?;

        let comparison = BudgetComparisonReport::generate(self.storage)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", section_header("Budget Comparison"))?;
        writeln!(
            self.out,
            "{}",
            comparison.format_terminal(&self.settings.currency_symbol)
        )?;
        Ok(())
    }

    fn weekly_summary(&mut self) -> TrackerResult<()> {
        let report = SummaryReport::weekly(self.storage, self.settings.week_start())?;
        self.print_summary(&report)
    }

    fn visualize(&mut self) -> TrackerResult<()> {
        let service = VisualizationService::new(self.storage);
        match self.renderer.as_mut() {
            Some(renderer) => service.render_spending_by_category(renderer.as_mut()),
            None => service.render_spending_by_category(&mut TextChart::new(&mut self.out)),
        }
    }

    fn export(&mut self) -> TrackerResult<()> {
        let paths = self.storage.paths();
        writeln!(
            self.out,
            "Data exported to:\n- {}\n- {}",
            paths.expenses_file().display(),
            paths.budget_file().display()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::Money;
    use crate::tui::ChartSlice;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(TrackerPaths::with_base_dir(temp_dir.path().to_path_buf()));
        (temp_dir, storage)
    }

    fn run(storage: &Storage, input: &str) -> String {
        let settings = Settings::default();
        let mut shell = Shell::new(storage, &settings, Cursor::new(input.to_string()), Vec::new());
        shell.run().unwrap();
        assert_eq!(shell.state(), ShellState::Exiting);
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_exact_match() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::LogExpense));
        assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse(" 1"), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_start_initializes_storage() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(&storage, "7\n");

        assert!(storage.paths().expenses_file().exists());
        assert!(storage.paths().budget_file().exists());
        assert!(out.contains("1. Log Expense"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_eof_exits() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(&storage, "");
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_invalid_choice() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(&storage, "9\n7\n");
        assert!(out.contains("Invalid choice. Try again."));
        assert!(storage.expenses.load().unwrap().is_empty());
    }

    #[test]
    fn test_log_expense_and_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(
            &storage,
            "1\n2024-01-10\nFood\n100\nlunch\n2\nFood\n120\n7\n",
        );

        assert!(out.contains("Expense logged successfully."));
        assert!(out.contains("Budget saved."));

        let expenses = storage.expenses.load().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].amount, Money::from_cents(10000));
        assert_eq!(expenses[0].note, "lunch");
        assert_eq!(
            storage.budgets.get("Food").unwrap().unwrap().budget,
            Money::from_cents(12000)
        );
    }

    #[test]
    fn test_bad_amount_aborts_without_write() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(&storage, "1\n\nFood\nabc\n7\n");

        assert!(out.contains("Error: Invalid amount: 'abc'"));
        assert!(out.ends_with("Goodbye!\n"));
        assert!(storage.expenses.load().unwrap().is_empty());
    }

    #[test]
    fn test_huge_amount_rejected_and_summary_still_works() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(
            &storage,
            "1\n2024-01-01\nFood\n90000000000000000\n\n\
             1\n2024-01-01\nFood\n90000000000000000\n\n\
             1\n2024-01-01\nFood\n1000000000000\n\n\
             1\n2024-01-02\nFood\n1000000000000\n\n\
             3\n7\n",
        );

        assert_eq!(out.matches("Error: Amount out of range").count(), 2);
        assert_eq!(storage.expenses.load().unwrap().len(), 2);
        assert!(out.contains("2000000000000.00"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_bad_date_aborts_before_other_prompts() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(&storage, "1\nyesterday\n7\n");

        assert!(out.contains("Error: Invalid date: 'yesterday'"));
        assert!(!out.contains("Enter category: "));
        assert!(storage.expenses.load().unwrap().is_empty());
    }

    #[test]
    fn test_unwritable_audit_log_is_reported_and_session_continues() {
        let (_temp_dir, storage) = create_test_storage();
        storage.ensure_initialized().unwrap();
        std::fs::create_dir_all(storage.paths().audit_log()).unwrap();

        let out = run(&storage, "1\n2024-01-10\nFood\n100\n\n6\n7\n");

        assert!(out.contains("Error: Failed to open audit log"));
        assert!(!out.contains("Expense logged successfully."));
        assert!(out.contains("Data exported to:"));
        assert!(out.ends_with("Goodbye!\n"));
        assert!(storage.expenses.load().unwrap().is_empty());
    }

    #[test]
    fn test_empty_summaries_report_no_data() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(&storage, "3\n4\n5\n7\n");

        assert_eq!(out.matches("No expenses found.").count(), 2);
        assert!(out.contains("No expenses to show."));
        assert!(!out.contains("--- Monthly Expense Summary ---"));
    }

    #[test]
    fn test_monthly_summary_with_comparison() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(
            &storage,
            "1\n2024-01-05\nFood\n100\n\n\
             1\n2024-01-20\nFood\n50\n\n\
             1\n2024-02-03\nFood\n30\n\n\
             2\nFood\n120\n\
             3\n7\n",
        );

        assert!(out.contains("--- Monthly Expense Summary ---"));
        assert!(out.contains("2024-01"));
        assert!(out.contains("150.00"));
        assert!(out.contains("--- Budget Comparison ---"));
        assert!(out.contains("⚠️ Over budget in Food: ₹180.00 / ₹120.00"));
    }

    #[test]
    fn test_weekly_summary() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(&storage, "1\n2024-01-07\nFood\n10\n\n4\n7\n");

        assert!(out.contains("--- Weekly Expense Summary ---"));
        assert!(out.contains("2024 Week 01"));
    }

    #[test]
    fn test_visualize_as_text() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(&storage, "1\n\nFood\n100\n\n1\n\nRent\n60\n\n5\n7\n");

        assert!(out.contains("Spending by Category"));
        assert!(out.contains("62.5%"));
        assert!(out.contains("37.5%"));
    }

    struct SharedRenderer(Rc<RefCell<Vec<ChartSlice>>>);

    impl ChartRenderer for SharedRenderer {
        fn render(&mut self, _title: &str, slices: &[ChartSlice]) -> TrackerResult<()> {
            self.0.borrow_mut().extend_from_slice(slices);
            Ok(())
        }
    }

    #[test]
    fn test_visualize_uses_renderer() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let mut shell = Shell::new(
            &storage,
            &settings,
            Cursor::new("1\n\nFood\n10\n\n5\n7\n"),
            Vec::new(),
        )
        .with_renderer(Box::new(SharedRenderer(Rc::clone(&seen))));
        shell.run().unwrap();

        let slices = seen.borrow();
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].caption(), "Food 100.0%");
    }

    #[test]
    fn test_export_prints_paths() {
        let (_temp_dir, storage) = create_test_storage();
        let out = run(&storage, "6\n7\n");

        let expected = format!(
            "Data exported to:\n- {}\n- {}\n",
            storage.paths().expenses_file().display(),
            storage.paths().budget_file().display()
        );
        assert!(out.contains(&expected));
    }

    #[test]
    fn test_corrupt_file_ends_session() {
        let (_temp_dir, storage) = create_test_storage();
        storage.ensure_initialized().unwrap();
        std::fs::write(storage.paths().expenses_file(), "When,What\nx,y\n").unwrap();

        let settings = Settings::default();
        let mut shell = Shell::new(&storage, &settings, Cursor::new("3\n7\n"), Vec::new());
        let err = shell.run().unwrap_err();
        assert!(err.is_corrupt());
    }
}
