//! Action row.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::widgets::{Block, Paragraph};
use wixbuddy_view::regions::{Action, ActionVariant};

use super::theme;

/// Horizontal padding inside a button, border included.
const BUTTON_PADDING: usize = 4;

/// Width of the button drawn for `label`.
#[must_use]
pub fn button_width(label: &str) -> u16 {
    u16::try_from(label.chars().count() + BUTTON_PADDING).unwrap_or(u16::MAX)
}

/// Renders the buttons centered in one row, highlighting the focused one.
pub fn render(frame: &mut Frame, area: Rect, actions: &[Action], focused: usize) {
    let cells = Layout::horizontal(
        actions
            .iter()
            .map(|action| Constraint::Length(button_width(&action.label))),
    )
    .flex(Flex::Center)
    .spacing(2)
    .split(area);

    for (index, (action, cell)) in actions.iter().zip(cells.iter()).enumerate() {
        let mut style = match action.variant {
            ActionVariant::Primary => theme::primary_button(),
            ActionVariant::Outline => theme::outline_button(),
        };
        if index == focused {
            style = style.patch(theme::focused());
        }
        let button = Paragraph::new(action.label.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_style(style));
        frame.render_widget(button, *cell);
    }
}
