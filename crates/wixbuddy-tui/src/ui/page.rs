//! Header and card grid.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use wixbuddy_common::constants::WIDE_LAYOUT_MIN_WIDTH;
use wixbuddy_view::regions::{Card, PageRegions};

use super::theme;

/// Renders the centered title and subtitle.
pub fn render_header(frame: &mut Frame, area: Rect, regions: &PageRegions) {
    let text = vec![
        Line::default(),
        Line::from(Span::styled(regions.title.as_str(), theme::title())),
        Line::from(Span::styled(regions.subtitle.as_str(), theme::body())),
    ];
    let header = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}

/// Direction the card grid flows in at the given width.
///
/// Mirrors `grid-cols-1 md:grid-cols-3`: one column on narrow terminals,
/// one row of cards on wide ones.
#[must_use]
pub const fn grid_direction(width: u16) -> Direction {
    if width >= WIDE_LAYOUT_MIN_WIDTH {
        Direction::Horizontal
    } else {
        Direction::Vertical
    }
}

/// Renders the cards, each in its own bordered block.
pub fn render_cards(frame: &mut Frame, area: Rect, cards: &[Card]) {
    if cards.is_empty() {
        return;
    }
    let direction = grid_direction(area.width);
    let cells = Layout::default()
        .direction(direction)
        .constraints(std::iter::repeat_n(Constraint::Fill(1), cards.len()))
        .spacing(1)
        .split(area);

    for (card, cell) in cards.iter().zip(cells.iter()) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme::body())
            .title(Span::styled(format!(" {} ", card.title), theme::card_title()));
        let body = Paragraph::new(card.body.as_str())
            .style(theme::body())
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, *cell);
    }
}
