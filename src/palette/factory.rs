//! Stock palette constructors.

use crate::color::Rgba;

use super::color_point::ColorPoint;
use super::error::PaletteError;
use super::palette::Palette;

const MAGENTA: Rgba = Rgba::opaque(255, 0, 255);
const BLUE: Rgba = Rgba::opaque(0, 0, 255);
const TURQUOISE: Rgba = Rgba::opaque(64, 224, 208);
const GREEN: Rgba = Rgba::opaque(0, 128, 0);
const YELLOW: Rgba = Rgba::opaque(255, 255, 0);
const RED: Rgba = Rgba::opaque(255, 0, 0);

/// The standard palette: black at 0.0, white at 1.0, and -- for palettes of
/// 8 or more colors -- a 6-stop spectrum (magenta, blue, turquoise, green,
/// yellow, red) at sevenths in between.
///
/// # Errors
///
/// [`PaletteError::InvalidPaletteSize`] if `number_of_colors < 2`.
pub fn standard_palette(number_of_colors: usize) -> Result<Palette, PaletteError> {
    let mut palette = Palette::new(number_of_colors)?;

    palette.add_color_point(ColorPoint::new(Rgba::BLACK, 0.0)?)?;
    palette.add_color_point(ColorPoint::new(Rgba::WHITE, 1.0)?)?;

    if number_of_colors < 8 {
        return Ok(palette);
    }

    let subdivision = 1.0 / 7.0;
    let stops = [MAGENTA, BLUE, TURQUOISE, GREEN, YELLOW, RED];
    for (i, color) in stops.into_iter().enumerate() {
        palette.add_color_point(ColorPoint::new(color, (i + 1) as f64 * subdivision)?)?;
    }

    Ok(palette)
}

/// A palette with two pins, `low` at position 0.0 and `high` at 1.0.
///
/// # Errors
///
/// [`PaletteError::InvalidPaletteSize`] if `number_of_colors < 2`.
pub fn two_pin_palette(
    number_of_colors: usize,
    low: Rgba,
    high: Rgba,
) -> Result<Palette, PaletteError> {
    let mut palette = Palette::new(number_of_colors)?;
    palette.add_color_point(ColorPoint::new(low, 0.0)?)?;
    palette.add_color_point(ColorPoint::new(high, 1.0)?)?;
    Ok(palette)
}

/// A palette built from the given pins. An empty pin list falls back to
/// the black/white two-pin minimum.
///
/// # Errors
///
/// [`PaletteError::InvalidPaletteSize`] if `number_of_colors < 2`.
pub fn palette_from_pins(
    number_of_colors: usize,
    pins: &[ColorPoint],
) -> Result<Palette, PaletteError> {
    if pins.is_empty() {
        return two_pin_palette(number_of_colors, Rgba::BLACK, Rgba::WHITE);
    }

    let mut palette = Palette::new(number_of_colors)?;
    for &pin in pins {
        palette.add_color_point(pin)?;
    }
    Ok(palette)
}
