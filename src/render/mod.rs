//! Rasters, lighting, and the render pipeline.

mod frame;
mod lighting;
mod pipeline;
mod raster;

pub use frame::{FrameBuffer, LockedFrame, RenderTarget};
pub use lighting::{calculate_light, Light};
pub use raster::{LightedRaster, RasterMode};
