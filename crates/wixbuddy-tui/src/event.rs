//! Terminal event handling.
//!
//! Captures keyboard and resize events from the terminal and maps keys to
//! preview commands.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Terminal input events.
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input arrived within the poll interval.
    Tick,
}

/// What a key asks the preview to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move focus to the next action.
    FocusNext,
    /// Move focus to the previous action.
    FocusPrevious,
    /// Press the focused action.
    Activate,
    /// Leave the preview.
    Quit,
}

/// Waits up to `tick` for the next relevant event.
///
/// Key releases and repeats, mouse, focus and paste events are skipped and
/// reported as [`TerminalEvent::Tick`].
///
/// # Errors
///
/// Returns an error if polling or reading the terminal fails.
pub fn next_event(tick: Duration) -> io::Result<TerminalEvent> {
    if !event::poll(tick)? {
        return Ok(TerminalEvent::Tick);
    }
    Ok(match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => TerminalEvent::Key(key),
        Event::Resize(width, height) => TerminalEvent::Resize(width, height),
        _ => TerminalEvent::Tick,
    })
}

/// Maps a key press to a command.
#[must_use]
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Command::Quit);
    }
    match key.code {
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Command::FocusNext),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Command::FocusPrevious),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Activate),
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}
