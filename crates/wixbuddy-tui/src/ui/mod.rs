//! Rendering of the preview.
//!
//! The screen is split top to bottom into header, card grid, action row,
//! and a one-line key hint.

pub mod actions;
pub mod page;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::app::App;

/// Height of the header block.
const HEADER_HEIGHT: u16 = 4;
/// Height of the action row.
const ACTIONS_HEIGHT: u16 = 3;

/// Draws the whole preview.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme::page()), area);

    let [header_area, grid_area, actions_area, hint_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(ACTIONS_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(area);

    page::render_header(frame, header_area, &app.regions);
    page::render_cards(frame, grid_area, &app.regions.cards);
    actions::render(frame, actions_area, &app.regions.actions, app.focused);

    let hint = Paragraph::new(Line::from(
        " Tab/\u{2190}\u{2192} focus  Enter press  q quit",
    ))
    .style(theme::hint());
    frame.render_widget(hint, hint_area);
}
