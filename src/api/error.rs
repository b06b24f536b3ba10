//! Unified error type for the palette-render public API.

use thiserror::Error;

use crate::palette::PaletteError;
use crate::render::RasterMode;

/// Unified error type for rendering and raster operations.
///
/// Wraps the module errors into a single enum for convenient `?`
/// propagation in application code. Every variant is local, synchronous,
/// and non-retryable; a failed render leaves no usable partial image.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Palette or color-point failure.
    #[error(transparent)]
    Palette(#[from] PaletteError),

    /// An operation was invoked on a raster of the wrong variant.
    #[error("`{operation}` requires a {required:?}-mode raster, this raster is {actual:?}")]
    ModeMismatch {
        operation: &'static str,
        required: RasterMode,
        actual: RasterMode,
    },

    /// The output buffer could not be acquired for writing.
    #[error("frame buffer access failed: {reason}")]
    FrameBufferAccess { reason: String },

    /// A bulk block write does not line up with the raster.
    #[error("block {field} does not match raster: got {got}, expected {expected}")]
    BlockMismatch {
        field: &'static str,
        got: usize,
        expected: usize,
    },

    /// Display configuration failed to parse.
    #[error("display config error: {0}")]
    Config(#[from] serde_json::Error),
}
