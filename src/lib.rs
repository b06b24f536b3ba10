//! palette-render: palette-driven rendering of depth rasters to
//! displayable BGRA pixel buffers
//!
//! This library is the computational core of a fractal/heightmap
//! visualizer: the part that turns abstract per-pixel numbers into pixels.
//! A configurable [`Palette`] converts integer depth indices into colors,
//! an optional display remap ([`DisplayTransform`], driven by
//! [`DisplayConfig`]) adjusts the visual range, and a per-pixel ambient
//! lighting pass composites the result into a caller-supplied BGRA frame.
//!
//! # Quick Start
//!
//! ```
//! use palette_render::{
//!     factory, DisplayConfig, FrameBuffer, Light, LightedRaster, Rgba,
//! };
//!
//! // A 2-color palette: black at the bottom, white at the top
//! let palette = factory::two_pin_palette(2, Rgba::BLACK, Rgba::WHITE).unwrap();
//!
//! // A 1x1 depth raster pointing at the top palette entry
//! let mut raster = LightedRaster::depth(1, 1, 2);
//! raster.set_pixel(0, 0, 1, Light::ZERO).unwrap();
//!
//! let mut frame = FrameBuffer::new(1, 1);
//! raster
//!     .render(&palette, &DisplayConfig::default(), 1.0, &mut frame)
//!     .unwrap();
//!
//! assert_eq!(frame.pixel(0, 0), [255, 255, 255, 255]); // B, G, R, A
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! depth index ---> Palette::get_color     (anchor lookup / interpolation)
//!      |                 |
//!  (color mode           v
//!   reads pixels   DisplayTransform        (Off | Contrast | HSL remap,
//!   directly)            |                  stats rescanned per render)
//!                        v
//!                  calculate_light          (depth mode only: ambient *
//!                        |                   base + per-pixel vector)
//!                        v
//!                  B,G,R,A bytes at stride*y + x*4
//! ```
//!
//! # Palettes
//!
//! A [`Palette`] is an ordered set of [`ColorPoint`] anchors spread over an
//! index range. Anchors carry a normalized position in `[0, 1]`; indices
//! are derived from positions, so resizing the palette redistributes every
//! anchor. Lookups between anchors interpolate linearly per ARGB channel.
//!
//! # Display remapping
//!
//! [`DisplayConfig`] selects one of three modes: `Off` (identity),
//! `Contrast` (per-channel linear stretch between configured byte bounds),
//! or `Hsl` (rescale any combination of hue/saturation/lightness from the
//! range actually observed in the raster onto a configured target range).
//! The HSL mode scans every pixel's pre-transform color first; statistics
//! are never cached across renders.
//!
//! Two arithmetic quirks are preserved deliberately for bit-for-bit output
//! compatibility: the contrast stretch maps bound slot 0 to the Blue
//! channel (1 to Green, 2 to Red), and the hue-only remap offsets by the
//! *saturation* target minimum. See `DESIGN.md` for the full story.
//!
//! # Concurrency
//!
//! Rendering is synchronous. Pixels are mutually independent, so the
//! pipeline processes rows in parallel with rayon. Palette mutation is not
//! safe to interleave with renders over the same palette -- callers
//! serialize edits against renders (Rust's borrow rules enforce exactly
//! this for in-process use).

pub mod api;
pub mod color;
pub mod display;
pub mod palette;
pub mod render;


pub use api::RenderError;
pub use color::{Hsl, Rgb, Rgba};
pub use display::{DisplayConfig, DisplayMode, DisplayTransform};
pub use palette::{factory, ColorPoint, Palette, PaletteError};
pub use render::{
    calculate_light, FrameBuffer, Light, LightedRaster, LockedFrame, RasterMode, RenderTarget,
};
