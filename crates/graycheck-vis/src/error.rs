//! Error types for graycheck-vis.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// The drawing backend failed.
    #[error("render error: {0}")]
    Render(String),

    /// Nothing plottable was supplied.
    #[error("nothing to plot: {0}")]
    NoData(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        Error::Render(e.to_string())
    }
}
