//! Terminal setup and teardown functions.
//!
//! Low-level functions for entering and leaving TUI mode, used by
//! `TerminalManager` and by the panic hook.

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// - Enters alternate screen (preserves original terminal content)
/// - Enables bracketed paste (a pasted email arrives as one event)
///
/// # Errors
///
/// Returns an error if any terminal commands fail.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste)
}

/// Leave TUI mode and restore terminal to normal state.
///
/// Safe to call multiple times; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen);
    let _ = writer.flush();
    let _ = execute!(writer, Show);
}

/// Restore terminal to a usable state after a panic or error.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_writes_escape_sequences() {
        let mut buffer = Vec::new();
        enter_tui_mode(&mut buffer).unwrap();
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_leave_tui_mode_does_not_panic() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        leave_tui_mode(&mut buffer);
        assert!(!buffer.is_empty());
    }
}
