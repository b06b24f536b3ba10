//! The render pipeline: raster in, BGRA frame out.
//!
//! Per pixel: resolve the base color (palette lookup in depth mode,
//! direct read in color mode), apply the prepared display transform,
//! composite lighting (depth mode only), write the B, G, R, A quad.
//! Every pixel is a pure function of its own input plus the read-only
//! per-render scan statistics, so rows are processed in parallel.

use rayon::prelude::*;

use crate::api::RenderError;
use crate::display::{DisplayConfig, DisplayTransform};
use crate::palette::Palette;

use super::frame::RenderTarget;
use super::lighting::calculate_light;
use super::raster::LightedRaster;

impl LightedRaster {
    /// Render the raster into `target`.
    ///
    /// Depth mode resolves every pixel through `palette` and composites
    /// its lighting vector scaled by `ambient_power`; color mode reads
    /// pixels directly and skips lighting entirely (there are no per-pixel
    /// lighting vectors to composite). Either way the selected display
    /// transform runs in between, with its raster statistics recomputed on
    /// every call.
    ///
    /// A depth raster whose depth disagrees with the palette size is not
    /// renderable; the call logs a warning and leaves the frame untouched.
    ///
    /// # Errors
    ///
    /// [`RenderError::FrameBufferAccess`] when the target cannot be locked
    /// or cannot hold the raster. On failure nothing useful has been
    /// written; there is no partial-success contract.
    pub fn render<T>(
        &self,
        palette: &Palette,
        config: &DisplayConfig,
        ambient_power: f32,
        target: &mut T,
    ) -> Result<(), RenderError>
    where
        T: RenderTarget + ?Sized,
    {
        let width = self.width();
        let height = self.height();

        if let Some(depth) = self.depth_range() {
            if palette.number_of_colors() != depth {
                tracing::warn!(
                    palette_colors = palette.number_of_colors(),
                    depth,
                    "palette size does not match raster depth, leaving frame untouched"
                );
                return Ok(());
            }
        }

        tracing::debug!(
            width,
            height,
            raster = ?self.mode(),
            display = ?config.mode,
            "rendering raster"
        );

        let transform = DisplayTransform::prepare(config, self.base_colors(palette));

        let mut frame = target.lock()?;
        if frame.width() < width || frame.height() < height {
            return Err(RenderError::FrameBufferAccess {
                reason: format!(
                    "target {}x{} cannot hold raster {}x{}",
                    frame.width(),
                    frame.height(),
                    width,
                    height
                ),
            });
        }
        let stride = frame.stride();

        frame
            .bytes_mut()
            .par_chunks_mut(stride)
            .take(height)
            .enumerate()
            .for_each(|(y, row)| {
                for x in 0..width {
                    let i = y * width + x;
                    let shown = transform.apply(self.base_color_at(palette, i));
                    let final_color = match self.light_at(i) {
                        Some(light) => calculate_light(shown, light, ambient_power),
                        None => shown,
                    };
                    row[x * 4..x * 4 + 4].copy_from_slice(&final_color.to_bgra());
                }
            });

        Ok(())
    }
}
