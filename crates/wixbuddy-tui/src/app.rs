//! Preview application state.
//!
//! The only mutable state is which action has focus and whether the
//! preview keeps running. The page regions never change.

use wixbuddy_view::regions::{Action, PageRegions};

use crate::event::{self, Command, TerminalEvent};

/// Root application state for the preview.
#[derive(Debug)]
pub struct App {
    /// Whether the app should continue running.
    pub running: bool,
    /// Regions of the mounted page.
    pub regions: PageRegions,
    /// Index of the focused action.
    pub focused: usize,
}

impl App {
    /// Creates the state with the first action focused.
    #[must_use]
    pub const fn new(regions: PageRegions) -> Self {
        Self {
            running: true,
            regions,
            focused: 0,
        }
    }

    /// The focused action, if the page has any.
    #[must_use]
    pub fn focused_action(&self) -> Option<&Action> {
        self.regions.actions.get(self.focused)
    }

    /// Moves focus right, wrapping to the first action.
    pub fn focus_next(&mut self) {
        let count = self.regions.actions.len();
        if count > 0 {
            self.focused = (self.focused + 1) % count;
        }
    }

    /// Moves focus left, wrapping to the last action.
    pub fn focus_previous(&mut self) {
        let count = self.regions.actions.len();
        if count > 0 {
            self.focused = (self.focused + count - 1) % count;
        }
    }

    /// Presses the focused action. No handler is attached, so nothing but
    /// a log line results.
    pub fn activate_focused(&self) {
        if let Some(action) = self.focused_action() {
            tracing::debug!(label = %action.label, "action pressed, no handler attached");
            action.activate();
        }
    }

    /// Signals the app to quit.
    pub const fn quit(&mut self) {
        self.running = false;
    }

    /// Applies one terminal event.
    pub fn handle(&mut self, event: &TerminalEvent) {
        match event {
            TerminalEvent::Key(key) => {
                if let Some(command) = event::command_for(*key) {
                    self.apply(command);
                }
            }
            TerminalEvent::Resize(width, height) => {
                tracing::trace!(width, height, "terminal resized");
            }
            TerminalEvent::Tick => {}
        }
    }

    /// Applies one command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::FocusNext => self.focus_next(),
            Command::FocusPrevious => self.focus_previous(),
            Command::Activate => self.activate_focused(),
            Command::Quit => self.quit(),
        }
    }
}
