//! Terminal UI for mnk_games.

mod app;
mod input;
mod ui;

pub use app::{App, Flow};
pub use input::{clamp_cursor, move_cursor};

use crate::game::BoardConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument, warn};

/// Restores the terminal on drop, so every exit path out of [`run_tui`]
/// leaves raw mode and the alternate screen.
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

/// Runs the interactive game until the user quits.
///
/// # Errors
///
/// Fails if the terminal cannot be set up or an I/O error interrupts the loop.
/// The terminal is restored in either case.
#[instrument(skip(config), fields(width = config.width(), win_length = config.win_length()))]
pub fn run_tui(config: BoardConfig) -> Result<()> {
    info!("Starting terminal UI");
    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = TerminalGuard::new(restore_terminal);

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_loop(&mut terminal, App::new(config));
    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    info!("Terminal UI closed");
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Flow::Quit
        {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::cell::Cell;

    fn failing_setup(restored: &Cell<bool>) -> Result<()> {
        let _guard = TerminalGuard::new(|| restored.set(true));
        bail!("terminal unavailable");
    }

    #[test]
    fn test_guard_restores_terminal_when_setup_fails() {
        let restored = Cell::new(false);
        assert!(failing_setup(&restored).is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_guard_restores_once_on_normal_exit() {
        let calls = Cell::new(0);
        {
            let _guard = TerminalGuard::new(|| calls.set(calls.get() + 1));
            assert_eq!(calls.get(), 0);
        }
        assert_eq!(calls.get(), 1);
    }
}
