//! Terminal setup and teardown
//!
//! Initializes raw mode and the alternate screen, and installs a panic hook
//! that restores the terminal on crash.

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

use crate::error::{TrackerError, TrackerResult};

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

fn tui_err(e: io::Error) -> TrackerError {
    TrackerError::Tui(e.to_string())
}

static PANIC_HOOK: Once = Once::new();
static PANIC_HOOK_INSTALLS: AtomicUsize = AtomicUsize::new(0);

/// Restore the terminal before the default panic output, once per process
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));
        PANIC_HOOK_INSTALLS.fetch_add(1, Ordering::Relaxed);
    });
}

/// Initialize the terminal for drawing
///
/// Raw mode is switched back off if the alternate screen can't be entered.
pub fn init_terminal() -> TrackerResult<Tui> {
    install_panic_hook();

    enable_raw_mode().map_err(tui_err)?;

    let mut stdout = io::stdout();
    let setup = execute!(stdout, EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));

    setup.map_err(|e| {
        let _ = restore_terminal();
        tui_err(e)
    })
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> TrackerResult<()> {
    disable_raw_mode().map_err(tui_err)?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(tui_err)?;
    Ok(())
}
