//! # wixbuddy-tui
//!
//! Terminal preview of the WixBuddy landing page.
//!
//! Built with `ratatui` and `crossterm`. The page is read once into its
//! regions and laid out as:
//! - a header with title and subtitle,
//! - a card grid (three columns on wide terminals, stacked otherwise),
//! - the action row, where buttons can be focused and pressed.
//!
//! Pressing a button does nothing: the page attaches no handlers.

pub mod app;
pub mod error;
pub mod event;
pub mod terminal;
pub mod ui;

use std::time::Duration;

use wixbuddy_common::config::PreviewConfig;
use wixbuddy_view::Node;
use wixbuddy_view::regions::PageRegions;

use crate::app::App;
use crate::error::Result;

/// Mounts `page` in the terminal and runs until the user quits.
///
/// The terminal is restored on return, including on error.
///
/// # Errors
///
/// Returns an error if the page lacks a region the preview lays out, or if
/// terminal setup, drawing, or event polling fails.
pub fn run(page: &Node, config: &PreviewConfig) -> Result<()> {
    let regions = PageRegions::extract(page)?;
    let mut app = App::new(regions);
    let tick = Duration::from_millis(config.tick_ms);

    let (mut terminal, _guard) = terminal::init()?;
    tracing::info!(tick_ms = config.tick_ms, "preview started");

    while app.running {
        let _ = terminal.draw(|frame| ui::render(frame, &app))?;
        let event = event::next_event(tick)?;
        app.handle(&event);
    }

    tracing::info!("preview closed");
    Ok(())
}
