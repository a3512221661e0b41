//! Terminal render context.
//!
//! [`Tui`] owns the screen for its whole lifetime: raw mode and the
//! alternate screen are entered in [`Tui::enter`] and left again on
//! [`Tui::restore`] or on drop, whichever comes first.

use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use tracing::{debug, warn};

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl Tui {
    /// Takes over the terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;
        debug!("terminal acquired");
        Ok(Self {
            terminal,
            active: true,
        })
    }

    pub fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Gives the terminal back. Safe to call more than once.
    ///
    /// Every teardown step runs even if an earlier one fails; the first
    /// error is returned.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let steps = [
            disable_raw_mode(),
            execute!(self.terminal.backend_mut(), LeaveAlternateScreen),
            self.terminal.show_cursor(),
        ];
        let result = first_error(steps);
        debug!(ok = result.is_ok(), "terminal released");
        result
    }
}

/// Collapses teardown results into the first failure, if any.
fn first_error<I>(results: I) -> io::Result<()>
where
    I: IntoIterator<Item = io::Result<()>>,
{
    let mut first = None;
    for result in results {
        if let Err(e) = result {
            warn!(error = %e, "terminal teardown step failed");
            first.get_or_insert(e);
        }
    }
    match first {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "failed to restore terminal");
        }
    }
}
