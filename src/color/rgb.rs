//! Working RGB color
//!
//! `Rgb` holds three float channels clamped to the unit interval. It exists
//! so that HSL math can accumulate intermediate values without worrying
//! about byte overflow; quantization back to 8 bits happens once, at
//! [`Rgb::to_rgba`].

use super::rgba::Rgba;

/// A color with three `f64` channels, each clamped to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    r: f64,
    g: f64,
    b: f64,
}

impl Rgb {
    /// Create a working color. Channels outside `[0, 1]` are clamped.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Red channel.
    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Green channel.
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Blue channel.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Quantize to a stored color with the given alpha.
    ///
    /// Each channel becomes `floor(x * 255 + 0.5)` clamped to `0..=255`
    /// (round half up).
    #[inline]
    pub fn to_rgba(self, alpha: u8) -> Rgba {
        Rgba::new(
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            alpha,
        )
    }
}

#[inline]
fn quantize(channel: f64) -> u8 {
    (channel * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}
