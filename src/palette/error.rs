//! Error type for palette and color-point operations.

use thiserror::Error;

/// Validation and lookup failures for [`Palette`](super::Palette) and
/// [`ColorPoint`](super::ColorPoint) operations.
///
/// All variants are synchronous and non-retryable; callers surface them
/// directly.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PaletteError {
    /// Anchor position outside the normalized `[0, 1]` range.
    #[error("position must be within [0, 1], got {position}")]
    InvalidPosition { position: f64 },

    /// Palettes need at least 2 colors to interpolate between.
    #[error("palette must have at least 2 colors, got {count}")]
    InvalidPaletteSize { count: usize },

    /// No color point exists at the given index.
    #[error("no color point at index {index}")]
    PointNotFound { index: usize },

    /// A color point already occupies the target index.
    #[error("color point already exists at index {index}")]
    IndexOccupied { index: usize },

    /// Index outside `[0, number_of_colors)`.
    #[error("index {index} out of range for palette of {limit} colors")]
    OutOfRange { index: usize, limit: usize },
}
