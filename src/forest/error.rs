use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors that can occur while rendering the chart
#[derive(Debug, Error)]
pub enum PlotError {
    /// Drawing backend failure (rasterization, font lookup, PNG encoding)
    #[error("Drawing error: {0}")]
    Draw(String),

    /// Filesystem error (unwritable output path, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for PlotError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Draw(err.to_string())
    }
}

/// Type alias for Results using PlotError
pub type Result<T> = std::result::Result<T, PlotError>;
