use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use expense_tracker::config::paths::{TrackerPaths, DATA_DIR_ENV};
use expense_tracker::config::settings::Settings;
use expense_tracker::shell::Shell;
use expense_tracker::storage::Storage;
use expense_tracker::tui::TerminalChart;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Personal expense ledger with budgets and spending summaries",
    long_about = "Log expenses, set monthly budgets per category, and view monthly \
                  and weekly summaries and a spending chart from an interactive menu. \
                  Data is kept in two CSV files under the data directory."
)]
struct Cli {
    /// Directory holding settings and the data/ folder
    #[arg(long, env = DATA_DIR_ENV, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }
    let storage = Storage::new(paths).with_audit(settings.audit_enabled);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let interactive = stdin.is_terminal() && stdout.is_terminal();

    let mut shell = Shell::new(&storage, &settings, stdin.lock(), stdout.lock());
    if interactive {
        shell = shell.with_renderer(Box::new(TerminalChart::new()));
    }
    shell.run()?;

    Ok(())
}
