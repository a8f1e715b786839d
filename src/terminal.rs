use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

pub type CardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Switch to raw mode on the alternate screen with the cursor hidden.
///
/// Any step that fails undoes the ones before it.
pub fn init() -> io::Result<CardTerminal> {
    setup_panic_hook();
    enable_raw_mode()?;
    undo_on_error(io::stdout().execute(EnterAlternateScreen).map(drop), || {
        let _ = disable_raw_mode();
    })?;
    undo_on_error(open_terminal(), leave_screen)
}

fn open_terminal() -> io::Result<CardTerminal> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

pub fn restore(terminal: &mut CardTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn leave_screen() {
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
}

/// Runs `undo` when `step` failed, then passes the result through.
fn undo_on_error<T>(step: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if let Err(e) = &step {
        warn!(error = %e, "terminal setup failed, restoring");
        undo();
    }
    step
}

fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        leave_screen();
        original_hook(panic_info);
    }));
}
