//! The renderable raster: depth-indexed or direct-color.

use crate::api::RenderError;
use crate::color::Rgba;
use crate::palette::Palette;

use super::lighting::Light;

/// Which variant a [`LightedRaster`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterMode {
    /// Per-pixel palette indices plus per-pixel lighting vectors.
    Depth,
    /// Per-pixel final colors; no palette lookup, no lighting.
    Color,
}

/// A 2-D raster in one of two mutually exclusive representations:
///
/// - **Depth mode**: each pixel is an integer index into a palette
///   (`0..depth`) paired with a lighting vector.
/// - **Color mode**: each pixel is a finished RGBA color.
///
/// The two modes share the render pipeline but not their mutation
/// operations; calling a depth-mode operation on a color raster (or vice
/// versa) fails with [`RenderError::ModeMismatch`] at the API boundary.
///
/// # Example
///
/// ```
/// use palette_render::{Light, LightedRaster, RasterMode};
///
/// let mut raster = LightedRaster::depth(4, 4, 16);
/// assert_eq!(raster.mode(), RasterMode::Depth);
/// raster.set_pixel(0, 0, 7, Light::ZERO).unwrap();
///
/// // Color-mode operations are rejected
/// assert!(raster
///     .set_pixel_color(0, 0, palette_render::Rgba::BLACK)
///     .is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LightedRaster {
    width: usize,
    height: usize,
    data: RasterData,
}

#[derive(Debug, Clone)]
enum RasterData {
    Depth {
        depth: usize,
        pixels: Vec<u32>,
        lighting: Vec<Light>,
    },
    Color {
        colors: Vec<Rgba>,
    },
}

impl LightedRaster {
    /// Create a depth-mode raster with all pixels at index 0 and zero
    /// lighting.
    ///
    /// Dimensions or depth below 1 are clamped to 1 (debug builds assert).
    pub fn depth(width: usize, height: usize, depth: usize) -> Self {
        debug_assert!(width >= 1 && height >= 1 && depth >= 1);
        let width = width.max(1);
        let height = height.max(1);
        let depth = depth.max(1);

        Self {
            width,
            height,
            data: RasterData::Depth {
                depth,
                pixels: vec![0; width * height],
                lighting: vec![Light::ZERO; width * height],
            },
        }
    }

    /// Create a color-mode raster with all pixels transparent black.
    ///
    /// Dimensions below 1 are clamped to 1 (debug builds assert).
    pub fn color(width: usize, height: usize) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        let width = width.max(1);
        let height = height.max(1);

        Self {
            width,
            height,
            data: RasterData::Color {
                colors: vec![Rgba::TRANSPARENT; width * height],
            },
        }
    }

    /// Raster width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Which variant this raster is.
    #[inline]
    pub fn mode(&self) -> RasterMode {
        match self.data {
            RasterData::Depth { .. } => RasterMode::Depth,
            RasterData::Color { .. } => RasterMode::Color,
        }
    }

    /// The depth (palette index domain), if this is a depth raster.
    #[inline]
    pub fn depth_range(&self) -> Option<usize> {
        match self.data {
            RasterData::Depth { depth, .. } => Some(depth),
            RasterData::Color { .. } => None,
        }
    }

    /// Set one depth pixel and its lighting vector. Depth mode only.
    ///
    /// Coordinates outside the raster or values of `z >= depth` are
    /// ignored (debug builds assert).
    pub fn set_pixel(
        &mut self,
        x: usize,
        y: usize,
        z: u32,
        light: Light,
    ) -> Result<(), RenderError> {
        if self.mode() != RasterMode::Depth {
            return Err(mode_mismatch("set_pixel", RasterMode::Depth, self));
        }
        let (width, height) = (self.width, self.height);
        if let RasterData::Depth {
            depth,
            pixels,
            lighting,
        } = &mut self.data
        {
            if x >= width || y >= height || z as usize >= *depth {
                debug_assert!(false, "set_pixel out of range: ({x}, {y}, {z})");
                return Ok(());
            }
            let i = y * width + x;
            pixels[i] = z;
            lighting[i] = light;
        }
        Ok(())
    }

    /// Set one color pixel. Color mode only.
    ///
    /// Coordinates outside the raster are ignored (debug builds assert).
    pub fn set_pixel_color(&mut self, x: usize, y: usize, color: Rgba) -> Result<(), RenderError> {
        if self.mode() != RasterMode::Color {
            return Err(mode_mismatch("set_pixel_color", RasterMode::Color, self));
        }
        let (width, height) = (self.width, self.height);
        if let RasterData::Color { colors } = &mut self.data {
            if x >= width || y >= height {
                debug_assert!(false, "set_pixel_color out of range: ({x}, {y})");
                return Ok(());
            }
            colors[y * width + x] = color;
        }
        Ok(())
    }

    /// Set every depth pixel to `z`. Depth mode only.
    pub fn fill_pixels(&mut self, z: u32) -> Result<(), RenderError> {
        if self.mode() != RasterMode::Depth {
            return Err(mode_mismatch("fill_pixels", RasterMode::Depth, self));
        }
        if let RasterData::Depth { pixels, .. } = &mut self.data {
            pixels.fill(z);
        }
        Ok(())
    }

    /// Set every pixel's lighting vector. Depth mode only.
    pub fn fill_lighting(&mut self, light: Light) -> Result<(), RenderError> {
        if self.mode() != RasterMode::Depth {
            return Err(mode_mismatch("fill_lighting", RasterMode::Depth, self));
        }
        if let RasterData::Depth { lighting, .. } = &mut self.data {
            lighting.fill(light);
        }
        Ok(())
    }

    /// Bulk-replace the column band `from_col..=to_col` with precomputed
    /// depth values and lighting vectors. Depth mode only.
    ///
    /// Producers compute vertical strips, so the input slices are
    /// column-major: entry `(c, y)` of the band lives at `c * height + y`,
    /// and both slices must hold exactly
    /// `(to_col - from_col + 1) * height` entries.
    ///
    /// # Errors
    ///
    /// [`RenderError::ModeMismatch`] on a color raster;
    /// [`RenderError::BlockMismatch`] when the column range or the slice
    /// lengths do not line up with the raster.
    pub fn set_block(
        &mut self,
        pixels: &[u32],
        lighting: &[Light],
        from_col: usize,
        to_col: usize,
    ) -> Result<(), RenderError> {
        if self.mode() != RasterMode::Depth {
            return Err(mode_mismatch("set_block", RasterMode::Depth, self));
        }
        let expected = self.check_block_bounds(from_col, to_col)?;
        check_block_len("pixels", pixels.len(), expected)?;
        check_block_len("lighting", lighting.len(), expected)?;

        let (width, height) = (self.width, self.height);
        if let RasterData::Depth {
            pixels: raster_pixels,
            lighting: raster_lighting,
            ..
        } = &mut self.data
        {
            for c in 0..=(to_col - from_col) {
                for y in 0..height {
                    let src = c * height + y;
                    let dst = y * width + from_col + c;
                    raster_pixels[dst] = pixels[src];
                    raster_lighting[dst] = lighting[src];
                }
            }
        }
        Ok(())
    }

    /// Bulk-replace the column band `from_col..=to_col` with precomputed
    /// colors. Color mode only; layout as in [`set_block`](Self::set_block).
    ///
    /// # Errors
    ///
    /// [`RenderError::ModeMismatch`] on a depth raster;
    /// [`RenderError::BlockMismatch`] when the column range or the slice
    /// length do not line up with the raster.
    pub fn set_color_block(
        &mut self,
        colors: &[Rgba],
        from_col: usize,
        to_col: usize,
    ) -> Result<(), RenderError> {
        if self.mode() != RasterMode::Color {
            return Err(mode_mismatch("set_color_block", RasterMode::Color, self));
        }
        let expected = self.check_block_bounds(from_col, to_col)?;
        check_block_len("colors", colors.len(), expected)?;

        let (width, height) = (self.width, self.height);
        if let RasterData::Color {
            colors: raster_colors,
        } = &mut self.data
        {
            for c in 0..=(to_col - from_col) {
                for y in 0..height {
                    raster_colors[y * width + from_col + c] = colors[c * height + y];
                }
            }
        }
        Ok(())
    }

    fn check_block_bounds(&self, from_col: usize, to_col: usize) -> Result<usize, RenderError> {
        if to_col >= self.width {
            return Err(RenderError::BlockMismatch {
                field: "to_col",
                got: to_col,
                expected: self.width - 1,
            });
        }
        if from_col > to_col {
            return Err(RenderError::BlockMismatch {
                field: "from_col",
                got: from_col,
                expected: to_col,
            });
        }
        Ok((to_col - from_col + 1) * self.height)
    }

    /// Pre-transform color of the pixel at linear index `i` (row-major):
    /// palette lookup in depth mode, direct read in color mode.
    pub(crate) fn base_color_at(&self, palette: &Palette, i: usize) -> Rgba {
        match &self.data {
            RasterData::Depth { pixels, .. } => palette.get_color(pixels[i] as usize),
            RasterData::Color { colors } => colors[i],
        }
    }

    /// Pre-transform colors of every pixel, in row-major order.
    pub(crate) fn base_colors<'a>(
        &'a self,
        palette: &'a Palette,
    ) -> impl Iterator<Item = Rgba> + 'a {
        (0..self.width * self.height).map(move |i| self.base_color_at(palette, i))
    }

    /// Lighting vector at linear index `i`; `None` in color mode.
    pub(crate) fn light_at(&self, i: usize) -> Option<Light> {
        match &self.data {
            RasterData::Depth { lighting, .. } => Some(lighting[i]),
            RasterData::Color { .. } => None,
        }
    }
}

fn mode_mismatch(
    operation: &'static str,
    required: RasterMode,
    raster: &LightedRaster,
) -> RenderError {
    RenderError::ModeMismatch {
        operation,
        required,
        actual: raster.mode(),
    }
}

fn check_block_len(field: &'static str, got: usize, expected: usize) -> Result<(), RenderError> {
    if got != expected {
        return Err(RenderError::BlockMismatch {
            field,
            got,
            expected,
        });
    }
    Ok(())
}
