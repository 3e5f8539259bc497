//! Terminal setup and configuration utilities.

use std::io::stdout;

use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;

/// Guard that enables bracketed paste mode and disables it on drop.
///
/// Bracketed paste delivers pasted text as a single `Event::Paste` instead
/// of a key-event stream, so pasting an ingredient list into a form field
/// does not trigger a submit. The guard ensures cleanup even if the
/// application panics.
pub struct TerminalEventGuard {
    bracketed_paste_enabled: bool,
}

impl TerminalEventGuard {
    #[must_use]
    pub fn new() -> Self {
        let mut guard = Self {
            bracketed_paste_enabled: false,
        };

        match execute!(stdout(), EnableBracketedPaste) {
            Ok(()) => guard.bracketed_paste_enabled = true,
            Err(e) => {
                eprintln!("Warning: Could not enable bracketed paste mode: {e}");
                eprintln!("Multi-line paste may not work correctly.");
            }
        }

        guard
    }
}

impl Default for TerminalEventGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalEventGuard {
    fn drop(&mut self) {
        if self.bracketed_paste_enabled {
            let _ = execute!(stdout(), DisableBracketedPaste);
        }
    }
}
