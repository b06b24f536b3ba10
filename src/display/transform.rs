//! The per-render display transform.
//!
//! A [`DisplayTransform`] is prepared once per render call from the
//! [`DisplayConfig`] and (for the HSL mode) a scan over every pixel's
//! pre-transform color; applying it is then a pure per-pixel function, so
//! rows can be processed in parallel against the shared prepared state.
//! Nothing is cached across render calls -- palette or raster contents may
//! change between them.

use crate::color::{Hsl, Rgba};

use super::config::{DisplayConfig, DisplayMode};

/// Linear remap of one HSL channel from its observed raster range onto a
/// configured target range: `new = base + (old - observed_min) * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRemap {
    base: f64,
    observed_min: f64,
    scale: f64,
}

impl ChannelRemap {
    #[inline]
    fn apply(&self, old: f64) -> f64 {
        self.base + (old - self.observed_min) * self.scale
    }
}

/// A prepared display transform: identity, contrast stretch, or HSL remap.
///
/// Built by [`prepare`](Self::prepare) from the config plus the raster's
/// pre-transform colors, then applied per pixel with
/// [`apply`](Self::apply).
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayTransform {
    /// Pass the base color straight through.
    Off,
    /// Per-channel linear stretch between configured byte bounds.
    ///
    /// Stretch slot 0 is applied to the Blue channel, slot 1 to Green and
    /// slot 2 to Red. That mapping is historical and almost certainly
    /// unintended, but downstream output depends on it bit-for-bit, so it
    /// stays.
    Contrast {
        min_rgb: [u8; 3],
        stretch: [f64; 3],
    },
    /// Rescale the enabled HSL channels from their observed ranges onto
    /// the configured target ranges.
    Hsl {
        hue: Option<ChannelRemap>,
        saturation: Option<ChannelRemap>,
        lightness: Option<ChannelRemap>,
    },
}

impl DisplayTransform {
    /// Build the transform for one render pass.
    ///
    /// `base_colors` must yield the pre-transform color of every pixel
    /// (palette lookups in depth mode, direct reads in color mode); it is
    /// only consumed in HSL mode, where the observed min/max of each
    /// enabled channel is collected. An HSL config with no channel enabled
    /// degenerates to the identity.
    pub fn prepare<I>(config: &DisplayConfig, base_colors: I) -> Self
    where
        I: IntoIterator<Item = Rgba>,
    {
        match config.mode {
            DisplayMode::Off => DisplayTransform::Off,
            DisplayMode::Contrast => {
                let mut stretch = [0.0; 3];
                for i in 0..3 {
                    stretch[i] = 255.0 / (config.max_rgb[i] as f64 - config.min_rgb[i] as f64);
                }
                DisplayTransform::Contrast {
                    min_rgb: config.min_rgb,
                    stretch,
                }
            }
            DisplayMode::Hsl => {
                if !config.hue && !config.saturation && !config.lightness {
                    return DisplayTransform::Off;
                }

                let stats = ObservedRanges::scan(base_colors);

                // The hue-only path offsets by the *saturation* target
                // minimum. A copy-paste slip in the ancestry of this code,
                // preserved because rendered output is compared
                // bit-for-bit across versions.
                let hue_base = if config.hue && !config.saturation && !config.lightness {
                    config.min_saturation
                } else {
                    config.min_hue
                };

                DisplayTransform::Hsl {
                    hue: config.hue.then(|| ChannelRemap {
                        base: hue_base,
                        observed_min: stats.hue_min,
                        scale: scale_factor(
                            config.min_hue,
                            config.max_hue,
                            stats.hue_min,
                            stats.hue_max,
                        ),
                    }),
                    saturation: config.saturation.then(|| ChannelRemap {
                        base: config.min_saturation,
                        observed_min: stats.saturation_min,
                        scale: scale_factor(
                            config.min_saturation,
                            config.max_saturation,
                            stats.saturation_min,
                            stats.saturation_max,
                        ),
                    }),
                    lightness: config.lightness.then(|| ChannelRemap {
                        base: config.min_lightness,
                        observed_min: stats.lightness_min,
                        scale: scale_factor(
                            config.min_lightness,
                            config.max_lightness,
                            stats.lightness_min,
                            stats.lightness_max,
                        ),
                    }),
                }
            }
        }
    }

    /// Transform one pixel's base color. Pure; safe to call from parallel
    /// row workers.
    pub fn apply(&self, color: Rgba) -> Rgba {
        match self {
            DisplayTransform::Off => color,
            DisplayTransform::Contrast { min_rgb, stretch } => Rgba::new(
                stretch_channel(color.r, min_rgb[2], stretch[2]),
                stretch_channel(color.g, min_rgb[1], stretch[1]),
                stretch_channel(color.b, min_rgb[0], stretch[0]),
                color.a,
            ),
            DisplayTransform::Hsl {
                hue,
                saturation,
                lightness,
            } => {
                let mut hsl = Hsl::from(color);
                if let Some(remap) = saturation {
                    hsl.set_s(remap.apply(hsl.s()));
                }
                if let Some(remap) = lightness {
                    hsl.set_l(remap.apply(hsl.l()));
                }
                if let Some(remap) = hue {
                    hsl.set_h(remap.apply(hsl.h()));
                }
                hsl.to_rgba(color.a)
            }
        }
    }
}

#[inline]
fn stretch_channel(value: u8, min: u8, stretch: f64) -> u8 {
    let stretched = (value as f64 - min as f64) * stretch + 0.49999;
    (stretched as i32).clamp(0, 255) as u8
}

fn scale_factor(target_min: f64, target_max: f64, observed_min: f64, observed_max: f64) -> f64 {
    if observed_max > observed_min {
        (target_max - target_min) / (observed_max - observed_min)
    } else {
        1.0
    }
}

/// Observed min/max of each HSL channel across the raster.
struct ObservedRanges {
    hue_min: f64,
    hue_max: f64,
    saturation_min: f64,
    saturation_max: f64,
    lightness_min: f64,
    lightness_max: f64,
}

impl ObservedRanges {
    fn scan<I>(base_colors: I) -> Self
    where
        I: IntoIterator<Item = Rgba>,
    {
        let mut stats = Self {
            hue_min: 360.0,
            hue_max: 0.0,
            saturation_min: 1.0,
            saturation_max: 0.0,
            lightness_min: 1.0,
            lightness_max: 0.0,
        };

        for color in base_colors {
            let hsl = Hsl::from(color);
            stats.hue_min = stats.hue_min.min(hsl.h());
            stats.hue_max = stats.hue_max.max(hsl.h());
            stats.saturation_min = stats.saturation_min.min(hsl.s());
            stats.saturation_max = stats.saturation_max.max(hsl.s());
            stats.lightness_min = stats.lightness_min.min(hsl.l());
            stats.lightness_max = stats.lightness_max.max(hsl.l());
        }

        stats
    }
}
