//! Errors raised when a host reads a tree that lacks the page regions.

use thiserror::Error;

/// Errors from [`crate::regions::PageRegions::extract`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    /// A page region the host needs is absent.
    #[error("page has no {region}")]
    MissingRegion {
        /// Name of the missing region.
        region: &'static str,
    },

    /// A region is present but not laid out as expected.
    #[error("unexpected page shape: {message}")]
    UnexpectedShape {
        /// Description of the mismatch.
        message: String,
    },
}

/// Convenience alias for view results.
pub type Result<T> = std::result::Result<T, ViewError>;
