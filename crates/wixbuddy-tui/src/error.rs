//! Errors raised by the terminal preview.

use thiserror::Error;
use wixbuddy_view::error::ViewError;

/// Terminal preview failures.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Terminal setup, drawing or event polling failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The page cannot be laid out.
    #[error(transparent)]
    View(#[from] ViewError),
}

/// Convenience alias for preview results.
pub type Result<T> = std::result::Result<T, TuiError>;
