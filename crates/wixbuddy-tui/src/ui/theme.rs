//! Terminal approximations of the page's utility classes.

use ratatui::style::{Color, Modifier, Style};

/// `teal-400`.
pub const ACCENT: Color = Color::Rgb(45, 212, 191);
/// `gray-300`.
pub const MUTED: Color = Color::Rgb(209, 213, 219);
/// `gray-900`.
pub const BACKGROUND: Color = Color::Rgb(17, 24, 39);

/// `bg-gray-900 text-white`.
pub fn page() -> Style {
    Style::default().bg(BACKGROUND).fg(Color::White)
}

/// `text-4xl font-bold text-teal-400`.
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// `text-xl font-semibold text-teal-400`.
pub fn card_title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// `text-gray-300`.
pub fn body() -> Style {
    Style::default().fg(MUTED)
}

/// `btn-primary`.
pub fn primary_button() -> Style {
    Style::default()
        .bg(ACCENT)
        .fg(BACKGROUND)
        .add_modifier(Modifier::BOLD)
}

/// `btn-outline`.
pub fn outline_button() -> Style {
    Style::default().fg(ACCENT)
}

/// Extra emphasis for the focused button.
pub fn focused() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Key hint line.
pub fn hint() -> Style {
    Style::default().fg(Color::DarkGray)
}
