//! Ambient + directional lighting compositing.

use crate::color::Rgba;

/// A per-pixel lighting contribution, one component per color channel
/// (x → red, y → green, z → blue).
///
/// Components are additive in normalized channel space; the zero vector
/// contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Light {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Light {
    /// No directional contribution.
    pub const ZERO: Light = Light {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a lighting vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Composite a base color with a lighting vector and an ambient scalar.
///
/// Per channel: `clamp(0, 1, ambient_power * channel/255 + component)`,
/// scaled back to a byte with a truncating cast. Alpha passes through
/// unchanged. `ambient_power` of 1.0 with a zero vector is (up to float
/// rounding) the identity.
pub fn calculate_light(color: Rgba, light: Light, ambient_power: f32) -> Rgba {
    let r = (ambient_power * color.r as f32 / 255.0 + light.x).clamp(0.0, 1.0);
    let g = (ambient_power * color.g as f32 / 255.0 + light.y).clamp(0.0, 1.0);
    let b = (ambient_power * color.b as f32 / 255.0 + light.z).clamp(0.0, 1.0);

    Rgba::new(
        (r * 255.0) as u8,
        (g * 255.0) as u8,
        (b * 255.0) as u8,
        color.a,
    )
}
