//! Display remap configuration.

use serde::{Deserialize, Serialize};

/// Ceiling for hue targets, just shy of the wrap point.
pub const MAX_HUE: f64 = 359.9;

/// Default hue target ceiling; stops short of wrapping back toward red.
pub const IDEAL_MAX_HUE: f64 = 300.0;

/// Which display remap runs before lighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayMode {
    /// No remap; palette colors pass straight through.
    #[default]
    Off,
    /// Per-channel linear contrast stretch.
    Contrast,
    /// Rescale of hue and/or saturation and/or lightness.
    Hsl,
}

/// Settings for the display transform, consumed read-only at render time.
///
/// `hue`, `saturation`, and `lightness` select which channels participate
/// when `mode` is [`DisplayMode::Hsl`]; the RGB bounds drive
/// [`DisplayMode::Contrast`]. The remaining pairs are the *target* ranges
/// the observed raster range is mapped onto.
///
/// Deserialized configs should pass through [`validate`](Self::validate)
/// (or be loaded via [`from_json`](Self::from_json), which does it for
/// you): it restores the min ≤ max invariant per pair by swapping and
/// clamps every value to its domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub mode: DisplayMode,
    /// Remap hue when mode is Hsl.
    pub hue: bool,
    /// Remap saturation when mode is Hsl.
    pub saturation: bool,
    /// Remap lightness when mode is Hsl.
    pub lightness: bool,
    /// Contrast lower bounds, one per stretch slot.
    pub min_rgb: [u8; 3],
    /// Contrast upper bounds, one per stretch slot.
    pub max_rgb: [u8; 3],
    /// Hue target range lower bound, degrees.
    pub min_hue: f64,
    /// Hue target range upper bound, degrees (clamped to [`MAX_HUE`]).
    pub max_hue: f64,
    pub min_saturation: f64,
    pub max_saturation: f64,
    pub min_lightness: f64,
    pub max_lightness: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Off,
            hue: false,
            saturation: false,
            lightness: false,
            min_rgb: [0, 0, 0],
            max_rgb: [255, 255, 255],
            min_hue: 0.0,
            max_hue: IDEAL_MAX_HUE,
            min_saturation: 0.0,
            max_saturation: 1.0,
            min_lightness: 0.0,
            max_lightness: 1.0,
        }
    }
}

impl DisplayConfig {
    /// Load a config from JSON, validating it afterwards. Missing fields
    /// take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        config.validate();
        tracing::debug!(mode = ?config.mode, "loaded display config");
        Ok(config)
    }

    /// Restore the min ≤ max invariant (swapping violated pairs) and clamp
    /// hue to `[0, 359.9]`, saturation and lightness to `[0, 1]`.
    pub fn validate(&mut self) {
        for i in 0..3 {
            if self.min_rgb[i] > self.max_rgb[i] {
                (self.min_rgb[i], self.max_rgb[i]) = (self.max_rgb[i], self.min_rgb[i]);
            }
        }

        if self.min_hue > self.max_hue {
            (self.min_hue, self.max_hue) = (self.max_hue, self.min_hue);
        }
        if self.min_hue < 0.0 {
            self.min_hue = 0.0;
        }
        if self.max_hue > MAX_HUE {
            self.max_hue = MAX_HUE;
        }

        if self.min_saturation > self.max_saturation {
            (self.min_saturation, self.max_saturation) = (self.max_saturation, self.min_saturation);
        }
        if self.min_saturation < 0.0 {
            self.min_saturation = 0.0;
        }
        if self.max_saturation > 1.0 {
            self.max_saturation = 1.0;
        }

        if self.min_lightness > self.max_lightness {
            (self.min_lightness, self.max_lightness) = (self.max_lightness, self.min_lightness);
        }
        if self.min_lightness < 0.0 {
            self.min_lightness = 0.0;
        }
        if self.max_lightness > 1.0 {
            self.max_lightness = 1.0;
        }
    }

    /// Restore the identity contrast bounds (0..255 per slot).
    pub fn reset_contrast(&mut self) {
        self.min_rgb = [0, 0, 0];
        self.max_rgb = [255, 255, 255];
    }

    /// Restore the identity HSL target ranges.
    pub fn reset_hsl(&mut self) {
        self.min_hue = 0.0;
        self.max_hue = MAX_HUE;
        self.min_saturation = 0.0;
        self.max_saturation = 1.0;
        self.min_lightness = 0.0;
        self.max_lightness = 1.0;
    }
}
