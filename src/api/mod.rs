//! Public API surface: the unified error type.

mod error;

pub use error::RenderError;
