//! Color types and conversions.
//!
//! - [`Rgba`]: stored byte-quad form (palette anchors, raster pixels, output)
//! - [`Rgb`]: float working form, clamped to the unit interval
//! - [`Hsl`]: hue/saturation/lightness with normalizing setters

mod hsl;
mod rgb;
mod rgba;

pub use hsl::Hsl;
pub use rgb::Rgb;
pub use rgba::Rgba;
