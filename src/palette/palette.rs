//! Palette: an ordered set of color anchors with interpolating lookup.

use std::collections::BTreeMap;

use crate::color::Rgba;

use super::color_point::ColorPoint;
use super::error::PaletteError;

/// An ordered collection of [`ColorPoint`] anchors mapped onto an integer
/// index range `[0, number_of_colors)`.
///
/// Any index resolves to a color: an exact anchor hit returns that anchor's
/// color, anything else is linearly interpolated between the nearest
/// anchors on either side. Anchors are keyed by index but own a normalized
/// `position`; the position is the durable coordinate and indices are
/// re-derived from it whenever the palette is resized.
///
/// All anchor accessors hand out copies -- anchors are only ever mutated
/// through the palette's own point-management operations.
///
/// # Example
///
/// ```
/// use palette_render::{ColorPoint, Palette, Rgba};
///
/// let mut palette = Palette::new(256).unwrap();
/// palette
///     .add_color_point(ColorPoint::new(Rgba::BLACK, 0.0).unwrap())
///     .unwrap();
/// palette
///     .add_color_point(ColorPoint::new(Rgba::WHITE, 1.0).unwrap())
///     .unwrap();
///
/// assert_eq!(palette.get_color(0), Rgba::BLACK);
/// assert_eq!(palette.get_color(255), Rgba::WHITE);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    number_of_colors: usize,
    points: BTreeMap<usize, ColorPoint>,
    name: String,
}

impl Palette {
    /// Create an empty palette spanning `number_of_colors` indices.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidPaletteSize`] if `number_of_colors < 2`.
    pub fn new(number_of_colors: usize) -> Result<Self, PaletteError> {
        if number_of_colors < 2 {
            return Err(PaletteError::InvalidPaletteSize {
                count: number_of_colors,
            });
        }
        Ok(Self {
            number_of_colors,
            points: BTreeMap::new(),
            name: String::from("Default"),
        })
    }

    /// Number of colors the palette spans.
    #[inline]
    pub fn number_of_colors(&self) -> usize {
        self.number_of_colors
    }

    /// Resize the palette, re-deriving every anchor's index from its stored
    /// `position` (not its old index) under the new count.
    ///
    /// The whole map is rebuilt through the same collision policy as
    /// [`add_color_point`](Self::add_color_point), so anchors whose
    /// re-derived indices collide may shift by one -- or, if the shifted
    /// slot is also taken, be dropped.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidPaletteSize`] if `number_of_colors < 2`.
    pub fn set_number_of_colors(&mut self, number_of_colors: usize) -> Result<(), PaletteError> {
        if number_of_colors < 2 {
            return Err(PaletteError::InvalidPaletteSize {
                count: number_of_colors,
            });
        }
        self.number_of_colors = number_of_colors;

        let mut rebuilt = BTreeMap::new();
        for (_, point) in std::mem::take(&mut self.points) {
            let index = point.color_index(number_of_colors)?;
            insert_with_collision_policy(&mut rebuilt, index, point, number_of_colors)?;
        }
        self.points = rebuilt;
        Ok(())
    }

    /// Palette name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the palette.
    #[inline]
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Resolve an index to a color.
    ///
    /// An exact anchor hit returns that anchor's color. Otherwise the
    /// nearest lower and higher anchors are located in index order:
    ///
    /// - neither exists: opaque white
    /// - only one exists: that anchor's color
    /// - both exist: linear per-channel ARGB blend, weighting the lower
    ///   anchor by `(high - index) / (high - low)`; each output byte is a
    ///   truncating cast of the weighted sum
    pub fn get_color(&self, index: usize) -> Rgba {
        if let Some(point) = self.points.get(&index) {
            return point.color();
        }

        let low = self.points.range(..index).next_back();
        let high = self.points.range(index..).next();

        match (low, high) {
            (None, None) => Rgba::WHITE,
            (None, Some((_, high))) => high.color(),
            (Some((_, low)), None) => low.color(),
            (Some((&low_index, low)), Some((&high_index, high))) => {
                blend(index, low_index, low.color(), high_index, high.color())
            }
        }
    }

    /// Insert a copy of the anchor at the index derived from its position.
    ///
    /// If that index is occupied the point shifts by one: down when the
    /// target is the last valid index, up otherwise, with its position
    /// re-derived from the shifted index. If the shifted slot is *also*
    /// occupied the point is silently dropped -- a long-standing quirk of
    /// the collision policy that callers rely on, preserved as-is.
    ///
    /// # Errors
    ///
    /// Propagates [`PaletteError::InvalidPaletteSize`] from index
    /// derivation; a dropped point is not an error.
    pub fn add_color_point(&mut self, point: ColorPoint) -> Result<(), PaletteError> {
        let index = point.color_index(self.number_of_colors)?;
        insert_with_collision_policy(&mut self.points, index, point, self.number_of_colors)
    }

    /// Remove the anchor at `index`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::PointNotFound`] if no anchor lives there.
    pub fn remove_color_point(&mut self, index: usize) -> Result<(), PaletteError> {
        self.points
            .remove(&index)
            .map(|_| ())
            .ok_or(PaletteError::PointNotFound { index })
    }

    /// Move the anchor at `old_index` to `new_index`, resetting its
    /// position to correspond exactly to the new index.
    ///
    /// On any failure the palette is left unchanged.
    ///
    /// # Errors
    ///
    /// [`PaletteError::OutOfRange`] if either index is outside
    /// `[0, number_of_colors)`, [`PaletteError::IndexOccupied`] if
    /// `new_index` already holds an anchor, [`PaletteError::PointNotFound`]
    /// if `old_index` does not.
    pub fn move_color_point(
        &mut self,
        old_index: usize,
        new_index: usize,
    ) -> Result<(), PaletteError> {
        let n = self.number_of_colors;
        if old_index >= n {
            return Err(PaletteError::OutOfRange {
                index: old_index,
                limit: n,
            });
        }
        if new_index >= n {
            return Err(PaletteError::OutOfRange {
                index: new_index,
                limit: n,
            });
        }
        if self.points.contains_key(&new_index) {
            return Err(PaletteError::IndexOccupied { index: new_index });
        }

        let mut point = self
            .points
            .remove(&old_index)
            .ok_or(PaletteError::PointNotFound { index: old_index })?;
        point.set_position_by_index(new_index, n)?;
        insert_with_collision_policy(&mut self.points, new_index, point, n)
    }

    /// Copy of the anchor at `index`, if any. Exact matches only.
    #[inline]
    pub fn color_point(&self, index: usize) -> Option<ColorPoint> {
        self.points.get(&index).copied()
    }

    /// Whether an anchor occupies `index`.
    #[inline]
    pub fn has_point_at(&self, index: usize) -> bool {
        self.points.contains_key(&index)
    }

    /// Number of anchors.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Snapshot of the anchor map, ordered by index. The snapshot is a
    /// deep copy; mutating it does not touch the palette.
    pub fn points_snapshot(&self) -> BTreeMap<usize, ColorPoint> {
        self.points.clone()
    }

    /// Redistribute the anchors evenly across the index range.
    ///
    /// With `k` anchors (in current index order) the first is pinned to
    /// index 0 and the last to `number_of_colors - 1`; intermediate anchor
    /// `i` lands at `trunc(i * number_of_colors / (k - 1) + 0.5) - 1`.
    /// No-op when the palette has no anchors.
    pub fn spread_pins_evenly(&mut self) -> Result<(), PaletteError> {
        let pin_count = self.points.len();
        if pin_count == 0 {
            return Ok(());
        }

        let n = self.number_of_colors;
        let spacing = n as f64 / (pin_count - 1) as f64;

        let mut rebuilt = BTreeMap::new();
        for (i, (_, mut point)) in std::mem::take(&mut self.points).into_iter().enumerate() {
            let new_index = if i == 0 {
                0
            } else if i == pin_count - 1 {
                n - 1
            } else {
                (i as f64 * spacing + 0.5) as usize - 1
            };
            point.set_position_by_index(new_index, n)?;
            insert_with_collision_policy(&mut rebuilt, new_index, point, n)?;
        }
        self.points = rebuilt;
        Ok(())
    }
}

/// Insert `point` at `index`, shifting by one on collision (down at the
/// last valid index, up anywhere else). A shifted point has its position
/// re-derived from the landing index. Both slots taken: the point is
/// dropped.
fn insert_with_collision_policy(
    points: &mut BTreeMap<usize, ColorPoint>,
    index: usize,
    mut point: ColorPoint,
    number_of_colors: usize,
) -> Result<(), PaletteError> {
    if !points.contains_key(&index) {
        points.insert(index, point);
        return Ok(());
    }

    let shifted = if index == number_of_colors - 1 {
        index - 1
    } else {
        index + 1
    };

    if points.contains_key(&shifted) {
        return Ok(());
    }

    point.set_position_by_index(shifted, number_of_colors)?;
    points.insert(shifted, point);
    Ok(())
}

fn blend(index: usize, low_index: usize, low: Rgba, high_index: usize, high: Rgba) -> Rgba {
    let w_high = (index - low_index) as f64 / (high_index - low_index) as f64;
    let w_low = 1.0 - w_high;

    // Truncating casts, not rounding: the byte arithmetic is part of the
    // palette's observable contract.
    Rgba::new(
        (w_low * low.r as f64 + w_high * high.r as f64) as u8,
        (w_low * low.g as f64 + w_high * high.g as f64) as u8,
        (w_low * low.b as f64 + w_high * high.b as f64) as u8,
        (w_low * low.a as f64 + w_high * high.a as f64) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(color: Rgba, position: f64) -> ColorPoint {
        ColorPoint::new(color, position).unwrap()
    }

    #[test]
    fn test_new_rejects_small_palettes() {
        assert!(matches!(
            Palette::new(0),
            Err(PaletteError::InvalidPaletteSize { count: 0 })
        ));
        assert!(matches!(
            Palette::new(1),
            Err(PaletteError::InvalidPaletteSize { count: 1 })
        ));
        assert!(Palette::new(2).is_ok());
    }

    #[test]
    fn test_get_color_empty_palette_is_white() {
        let palette = Palette::new(16).unwrap();
        assert_eq!(palette.get_color(0), Rgba::WHITE);
        assert_eq!(palette.get_color(15), Rgba::WHITE);
    }

    #[test]
    fn test_get_color_exact_match() {
        let mut palette = Palette::new(10).unwrap();
        let red = Rgba::opaque(200, 10, 10);
        palette.add_color_point(point(red, 0.5)).unwrap();
        // position 0.5 * 9 = 4.5 -> index 4
        assert!(palette.has_point_at(4));
        assert_eq!(palette.get_color(4), red);
    }

    #[test]
    fn test_get_color_single_point_covers_both_sides() {
        let mut palette = Palette::new(10).unwrap();
        let c = Rgba::opaque(1, 2, 3);
        palette.add_color_point(point(c, 0.5)).unwrap();
        // Below the only anchor: it is the nearest higher point
        assert_eq!(palette.get_color(0), c);
        // Above the only anchor: it is the nearest lower point
        assert_eq!(palette.get_color(9), c);
    }

    #[test]
    fn test_get_color_midpoint_truncated_mean() {
        let mut palette = Palette::new(11).unwrap();
        palette
            .add_color_point(point(Rgba::new(10, 20, 31, 40), 0.0))
            .unwrap();
        palette
            .add_color_point(point(Rgba::new(20, 40, 51, 60), 1.0))
            .unwrap();
        // Index 5 sits exactly between anchors 0 and 10
        assert_eq!(palette.get_color(5), Rgba::new(15, 30, 41, 50));
    }

    #[test]
    fn test_get_color_midpoint_odd_sum_truncates() {
        let mut palette = Palette::new(3).unwrap();
        palette.add_color_point(point(Rgba::BLACK, 0.0)).unwrap();
        palette.add_color_point(point(Rgba::WHITE, 1.0)).unwrap();
        // (0 + 255) / 2 = 127.5 truncates to 127
        assert_eq!(palette.get_color(1), Rgba::opaque(127, 127, 127));
    }

    #[test]
    fn test_get_color_weights() {
        let mut palette = Palette::new(5).unwrap();
        palette
            .add_color_point(point(Rgba::opaque(0, 0, 100), 0.0))
            .unwrap();
        palette
            .add_color_point(point(Rgba::opaque(200, 0, 0), 1.0))
            .unwrap();
        // Index 1 of [0, 4]: w_low = 0.75, w_high = 0.25
        assert_eq!(palette.get_color(1), Rgba::opaque(50, 0, 75));
        // Index 3: w_low = 0.25, w_high = 0.75
        assert_eq!(palette.get_color(3), Rgba::opaque(150, 0, 25));
    }

    #[test]
    fn test_add_collision_shifts_up() {
        let mut palette = Palette::new(100).unwrap();
        palette
            .add_color_point(point(Rgba::opaque(1, 1, 1), 0.5))
            .unwrap();
        assert!(palette.has_point_at(49));

        palette
            .add_color_point(point(Rgba::opaque(2, 2, 2), 0.5))
            .unwrap();
        // Second anchor also targets 49; not the last index, so it shifts up
        let shifted = palette.color_point(50).expect("shifted point");
        assert_eq!(shifted.color(), Rgba::opaque(2, 2, 2));
        // Position re-derived from the landing index
        assert!((shifted.position() - 50.0 / 99.0).abs() < 1e-12);
    }

    #[test]
    fn test_add_collision_at_last_index_shifts_down() {
        let mut palette = Palette::new(100).unwrap();
        palette
            .add_color_point(point(Rgba::opaque(1, 1, 1), 1.0))
            .unwrap();
        palette
            .add_color_point(point(Rgba::opaque(2, 2, 2), 1.0))
            .unwrap();
        assert!(palette.has_point_at(99));
        let shifted = palette.color_point(98).expect("shifted point");
        assert_eq!(shifted.color(), Rgba::opaque(2, 2, 2));
    }

    #[test]
    fn test_add_double_collision_drops_point() {
        let mut palette = Palette::new(100).unwrap();
        palette
            .add_color_point(point(Rgba::opaque(1, 1, 1), 0.5))
            .unwrap();
        palette
            .add_color_point(point(Rgba::opaque(2, 2, 2), 0.5))
            .unwrap();
        assert_eq!(palette.point_count(), 2);

        // Third anchor targets 49, shifted slot 50 is taken too: dropped
        palette
            .add_color_point(point(Rgba::opaque(3, 3, 3), 0.5))
            .unwrap();
        assert_eq!(palette.point_count(), 2);
        assert_eq!(palette.color_point(49).unwrap().color(), Rgba::opaque(1, 1, 1));
        assert_eq!(palette.color_point(50).unwrap().color(), Rgba::opaque(2, 2, 2));
    }

    #[test]
    fn test_remove_color_point() {
        let mut palette = Palette::new(10).unwrap();
        palette.add_color_point(point(Rgba::BLACK, 0.0)).unwrap();
        assert!(palette.remove_color_point(0).is_ok());
        assert_eq!(palette.point_count(), 0);
        assert!(matches!(
            palette.remove_color_point(0),
            Err(PaletteError::PointNotFound { index: 0 })
        ));
    }

    #[test]
    fn test_move_color_point() {
        let mut palette = Palette::new(10).unwrap();
        palette.add_color_point(point(Rgba::BLACK, 0.0)).unwrap();
        palette.move_color_point(0, 7).unwrap();
        assert!(!palette.has_point_at(0));
        let moved = palette.color_point(7).unwrap();
        assert!((moved.position() - 7.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_move_to_occupied_fails_and_leaves_palette_unchanged() {
        let mut palette = Palette::new(10).unwrap();
        palette.add_color_point(point(Rgba::BLACK, 0.0)).unwrap();
        palette.add_color_point(point(Rgba::WHITE, 1.0)).unwrap();
        let before = palette.points_snapshot();

        assert!(matches!(
            palette.move_color_point(0, 9),
            Err(PaletteError::IndexOccupied { index: 9 })
        ));
        assert_eq!(palette.points_snapshot(), before);
    }

    #[test]
    fn test_move_out_of_range() {
        let mut palette = Palette::new(10).unwrap();
        palette.add_color_point(point(Rgba::BLACK, 0.0)).unwrap();
        assert!(matches!(
            palette.move_color_point(10, 0),
            Err(PaletteError::OutOfRange { index: 10, limit: 10 })
        ));
        assert!(matches!(
            palette.move_color_point(0, 10),
            Err(PaletteError::OutOfRange { index: 10, limit: 10 })
        ));
    }

    #[test]
    fn test_move_missing_point() {
        let mut palette = Palette::new(10).unwrap();
        assert!(matches!(
            palette.move_color_point(3, 4),
            Err(PaletteError::PointNotFound { index: 3 })
        ));
    }

    #[test]
    fn test_resize_rederives_indices_from_position() {
        let mut palette = Palette::new(10).unwrap();
        palette.add_color_point(point(Rgba::BLACK, 0.0)).unwrap();
        palette.add_color_point(point(Rgba::WHITE, 1.0)).unwrap();
        assert!(palette.has_point_at(9));

        palette.set_number_of_colors(5).unwrap();
        assert!(palette.has_point_at(0));
        assert!(palette.has_point_at(4));
        assert_eq!(palette.point_count(), 2);
    }

    #[test]
    fn test_resize_collision_shifts() {
        let mut palette = Palette::new(100).unwrap();
        palette.add_color_point(point(Rgba::opaque(1, 1, 1), 0.0)).unwrap();
        palette.add_color_point(point(Rgba::opaque(2, 2, 2), 0.1)).unwrap();
        assert!(palette.has_point_at(0));
        assert!(palette.has_point_at(9));

        // At 2 colors both positions derive index 0; the second anchor
        // shifts up to index 1
        palette.set_number_of_colors(2).unwrap();
        assert_eq!(palette.color_point(0).unwrap().color(), Rgba::opaque(1, 1, 1));
        assert_eq!(palette.color_point(1).unwrap().color(), Rgba::opaque(2, 2, 2));
    }

    #[test]
    fn test_resize_rejects_small_count() {
        let mut palette = Palette::new(10).unwrap();
        assert!(matches!(
            palette.set_number_of_colors(1),
            Err(PaletteError::InvalidPaletteSize { count: 1 })
        ));
    }

    #[test]
    fn test_spread_pins_evenly_three_pins() {
        let mut palette = Palette::new(100).unwrap();
        palette.add_color_point(point(Rgba::opaque(1, 1, 1), 0.0)).unwrap();
        palette.add_color_point(point(Rgba::opaque(2, 2, 2), 0.2)).unwrap();
        palette.add_color_point(point(Rgba::opaque(3, 3, 3), 1.0)).unwrap();

        palette.spread_pins_evenly().unwrap();

        assert_eq!(palette.color_point(0).unwrap().color(), Rgba::opaque(1, 1, 1));
        // trunc(1 * 100/2 + 0.5) - 1 = 49
        assert_eq!(palette.color_point(49).unwrap().color(), Rgba::opaque(2, 2, 2));
        assert_eq!(palette.color_point(99).unwrap().color(), Rgba::opaque(3, 3, 3));
    }

    #[test]
    fn test_spread_pins_evenly_empty_is_noop() {
        let mut palette = Palette::new(100).unwrap();
        palette.spread_pins_evenly().unwrap();
        assert_eq!(palette.point_count(), 0);
    }

    #[test]
    fn test_spread_pins_evenly_single_pin_goes_to_zero() {
        let mut palette = Palette::new(100).unwrap();
        palette.add_color_point(point(Rgba::opaque(1, 1, 1), 0.7)).unwrap();
        palette.spread_pins_evenly().unwrap();
        assert!(palette.has_point_at(0));
        assert_eq!(palette.point_count(), 1);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut palette = Palette::new(10).unwrap();
        palette.add_color_point(point(Rgba::BLACK, 0.0)).unwrap();
        let copy = palette.clone();

        palette.remove_color_point(0).unwrap();
        assert_eq!(copy.point_count(), 1);
        assert_eq!(copy.number_of_colors(), 10);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut palette = Palette::new(10).unwrap();
        palette.add_color_point(point(Rgba::BLACK, 0.0)).unwrap();
        let mut snapshot = palette.points_snapshot();
        snapshot.clear();
        assert_eq!(palette.point_count(), 1);
    }
}
