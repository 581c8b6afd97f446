// File: crates/plot-core/src/error.rs
// Summary: Typed error taxonomy for chart construction and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// A measurement column does not line up with its sample axis.
    #[error("series '{series}': expected {expected} points, got {actual}")]
    SeriesLength {
        series: String,
        expected: usize,
        actual: usize,
    },

    #[error("failed to create raster surface")]
    Surface,

    #[error("PNG encoding failed")]
    EncodePng,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
