//! Application shell: cursor state and key dispatch.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use crate::controller::Controller;
use crate::input;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running.
    Continue,
    /// Exit the application.
    Quit,
}

/// Top-level application state: the controller plus view-only concerns.
pub struct App {
    controller: Controller,
    cursor: usize,
}

impl App {
    /// Creates the app around a restored controller, cursor on the center.
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            cursor: 4,
        }
    }

    /// The controller, for rendering from its session.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Mutable controller access, for the event loop's deferred-reply poll.
    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// Cursor position for board rendering.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Routes one key press to the controller or the cursor.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Char('m') => self.controller.on_toggle_automation(),
            KeyCode::Char('r') => self.controller.on_reset(),
            KeyCode::Char(c @ '1'..='9') => {
                let pos = c as usize - '1' as usize;
                self.controller.on_cell_selected(pos);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.on_cell_selected(self.cursor);
            }
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            code => debug!(?code, "Unbound key"),
        }
        KeyOutcome::Continue
    }
}
