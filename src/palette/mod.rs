//! Palette types: color anchors, the interpolating palette, stock
//! constructors, and their error type.

mod color_point;
mod error;
mod palette;

pub mod factory;

pub use color_point::ColorPoint;
pub use error::PaletteError;
pub use palette::Palette;
