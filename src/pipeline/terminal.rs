//! Terminal size detection and raw-mode session guard.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};

/// Size assumed when the terminal cannot be queried.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Current `(columns, rows)`, or [`FALLBACK_SIZE`] when not attached to a
/// terminal.
pub fn detect_terminal_size() -> (u16, u16) {
    match terminal::size() {
        Ok((width, height)) if width > 0 && height > 0 => (width, height),
        Ok(_) => FALLBACK_SIZE,
        Err(err) => {
            tracing::debug!(%err, "terminal size unavailable, using fallback");
            FALLBACK_SIZE
        }
    }
}

/// Raw mode plus alternate screen for the lifetime of the guard.
///
/// The previous terminal state is restored on drop.
pub struct TerminalGuard {
    stdout: Stdout,
    active: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, Hide)?;
        tracing::debug!("terminal session entered");
        Ok(Self {
            stdout,
            active: true,
        })
    }

    /// Restore the terminal now instead of on drop.
    pub fn exit(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.stdout, Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        self.stdout.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.exit() {
            tracing::warn!(%err, "failed to restore terminal");
        }
    }
}
