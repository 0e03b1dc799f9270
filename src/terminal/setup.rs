//! Low-level terminal setup and teardown.
//!
//! These functions switch the terminal in and out of TUI mode. They are
//! used by `TerminalManager` but can be called directly when needed.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode: alternate screen plus mouse capture.
///
/// Mouse capture is required for click and hover handling on the
/// category and post hit areas.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Leave TUI mode and restore the terminal to its normal state.
///
/// Safe to call multiple times and never panics; errors during
/// restoration are ignored since there is nothing useful to do with them.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();

    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);
    let _ = writer.flush();

    let _ = execute!(writer, Show);
}

/// Restore the terminal after a panic or unrecoverable error.
///
/// More aggressive than `leave_tui_mode`; intended for use from the
/// panic hook where no state can be assumed.
pub fn emergency_restore() {
    let mut stdout = io::stdout();
    leave_tui_mode(&mut stdout);
}
