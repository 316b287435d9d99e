//! Keyboard input mapping.
//!
//! Turns terminal key events into UI-agnostic actions and collapses the
//! events read between two ticks into one edge-triggered signal per tick.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// UI-agnostic input actions for Gopher Jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpInput {
    Confirm, // Space, Up or Enter: start, jump, restart
    Quit,    // Esc, q or Ctrl-C
    Other,
}

/// Map a key event to an action. Releases and auto-repeats map to `Other`
/// so holding Space does not keep re-triggering jumps.
pub fn map_key(key: KeyEvent) -> JumpInput {
    if key.kind != KeyEventKind::Press {
        return JumpInput::Other;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => JumpInput::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => JumpInput::Confirm,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => JumpInput::Quit,
        _ => JumpInput::Other,
    }
}

/// Input gathered between two ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub confirm: bool,
    pub quit: bool,
}

impl TickInput {
    pub fn record(&mut self, input: JumpInput) {
        match input {
            JumpInput::Confirm => self.confirm = true,
            JumpInput::Quit => self.quit = true,
            JumpInput::Other => {}
        }
    }

    /// Hand the confirm edge to one tick and clear it.
    pub fn take_confirm(&mut self) -> bool {
        std::mem::take(&mut self.confirm)
    }
}
