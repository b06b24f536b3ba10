//! Palette anchor: a color pinned to a normalized position.

use crate::color::Rgba;

use super::error::PaletteError;

/// A palette anchor -- a color plus a normalized position in `[0, 1]`.
///
/// The position, not the index, is the durable coordinate: when a palette
/// is resized, every point's index is re-derived from its position. A
/// position of 1.0 always maps to the highest color index.
///
/// # Example
///
/// ```
/// use palette_render::{ColorPoint, Rgba};
///
/// let point = ColorPoint::new(Rgba::opaque(255, 0, 0), 0.5).unwrap();
/// assert_eq!(point.color_index(101).unwrap(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPoint {
    color: Rgba,
    position: f64,
}

impl ColorPoint {
    /// Create an anchor at the given position.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidPosition`] if `position` is outside `[0, 1]`.
    pub fn new(color: Rgba, position: f64) -> Result<Self, PaletteError> {
        if !(0.0..=1.0).contains(&position) {
            return Err(PaletteError::InvalidPosition { position });
        }
        Ok(Self { color, position })
    }

    /// The anchor color.
    #[inline]
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Replace the anchor color.
    #[inline]
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// The normalized position, `[0, 1]`.
    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Set the normalized position.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidPosition`] if `position` is outside `[0, 1]`.
    pub fn set_position(&mut self, position: f64) -> Result<(), PaletteError> {
        if !(0.0..=1.0).contains(&position) {
            return Err(PaletteError::InvalidPosition { position });
        }
        self.position = position;
        Ok(())
    }

    /// The palette index this point maps to under the given color count:
    /// `floor(position * (number_of_colors - 1))`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidPaletteSize`] if `number_of_colors < 2`.
    pub fn color_index(&self, number_of_colors: usize) -> Result<usize, PaletteError> {
        if number_of_colors < 2 {
            return Err(PaletteError::InvalidPaletteSize {
                count: number_of_colors,
            });
        }
        Ok((self.position * (number_of_colors - 1) as f64) as usize)
    }

    /// Set the position to correspond exactly to `index` under the given
    /// color count: `index / (number_of_colors - 1)`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidPaletteSize`] if `number_of_colors < 2`,
    /// [`PaletteError::OutOfRange`] if `index >= number_of_colors`.
    pub fn set_position_by_index(
        &mut self,
        index: usize,
        number_of_colors: usize,
    ) -> Result<(), PaletteError> {
        if number_of_colors < 2 {
            return Err(PaletteError::InvalidPaletteSize {
                count: number_of_colors,
            });
        }
        if index >= number_of_colors {
            return Err(PaletteError::OutOfRange {
                index,
                limit: number_of_colors,
            });
        }
        self.position = index as f64 / (number_of_colors - 1) as f64;
        Ok(())
    }
}
