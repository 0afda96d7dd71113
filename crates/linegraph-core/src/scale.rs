// File: crates/linegraph-core/src/scale.rs
// Summary: Value (Y) and logical index (X) transforms onto integer pixels.

use crate::geometry::ViewGeometry;
use crate::series::{Bounds, MarginPolicy, SeriesBuffer};

/// Maps samples onto the drawable area for one frame.
///
/// Pure and `Copy`: the renderer builds one from a series snapshot and uses it for every
/// coordinate in the frame, so the axis, ticks, trace and inspector agree exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    pub bounds: Bounds,
    pub margin: MarginPolicy,
    pub geometry: ViewGeometry,
    /// Logical positions spanning the full width.
    pub x_divisor: usize,
}

impl CoordinateMapper {
    pub fn new(bounds: Bounds, margin: MarginPolicy, geometry: ViewGeometry, x_divisor: usize) -> Self {
        Self { bounds, margin, geometry, x_divisor }
    }

    pub fn for_series(series: &SeriesBuffer, geometry: ViewGeometry) -> Self {
        Self::new(series.bounds(), series.margin(), geometry, series.x_divisor())
    }

    /// Pixels from the top edge to the line representing `value`.
    /// `maximum` maps to 0 and `minimum` to the full height; a zero range maps to the midpoint.
    /// Results are clamped to `[-height, 2 * height]`, so values far outside the bounds (the
    /// axis of a series sitting far from zero) stay on a drawable pixel range.
    #[inline]
    pub fn value_to_y(&self, value: f64) -> i32 {
        let span = self.bounds.span();
        if span == 0.0 {
            return self.geometry.height / 2;
        }
        let inset = match self.margin {
            MarginPolicy::Fixed(_) => value,
            MarginPolicy::Proportional(m) => (1.0 - m) * value,
        };
        let height = f64::from(self.geometry.height);
        let y = (self.bounds.maximum - inset) * height / span;
        y.clamp(-height, 2.0 * height) as i32
    }

    /// Pixels from the top edge to the horizontal axis.
    #[inline]
    pub fn zero_y(&self) -> i32 {
        self.value_to_y(0.0)
    }

    /// Pixels from the left edge to logical position `index`; `x_divisor` maps to the full width.
    #[inline]
    pub fn index_to_x(&self, index: u64) -> i32 {
        if self.x_divisor == 0 {
            return 0;
        }
        ((index as f64 * f64::from(self.geometry.width)) / self.x_divisor as f64) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(max: f64, min: f64, margin: MarginPolicy, w: i32, h: i32, div: usize) -> CoordinateMapper {
        CoordinateMapper::new(Bounds::new(max, min), margin, ViewGeometry::new(w, h), div)
    }

    #[test]
    fn bounds_map_to_edges() {
        for (max, min) in [(1.0, -1.0), (41.0, -8.0), (3.5, 2.25)] {
            for h in [1, 97, 400] {
                let m = mapper(max, min, MarginPolicy::Fixed(1.0), 100, h, 10);
                assert_eq!(m.value_to_y(max), 0);
                assert_eq!(m.value_to_y(min), h);
                let s = mapper(max, min, MarginPolicy::Proportional(0.0), 100, h, 10);
                assert_eq!(s.value_to_y(max), 0);
                assert_eq!(s.value_to_y(min), h);
            }
        }
    }

    #[test]
    fn proportional_margin_insets_values() {
        let m = mapper(10.0, -10.0, MarginPolicy::Proportional(0.1), 100, 200, 10);
        // (10 - 0.9 * 10) / 20 * 200
        assert_eq!(m.value_to_y(10.0), 10);
        assert_eq!(m.value_to_y(-10.0), 190);
    }

    #[test]
    fn zero_y_uses_value_mapping() {
        let m = mapper(3.0, -1.0, MarginPolicy::Proportional(0.1), 300, 120, 3);
        assert_eq!(m.zero_y(), m.value_to_y(0.0));
        assert_eq!(m.zero_y(), 90);
    }

    #[test]
    fn degenerate_range_maps_to_midpoint() {
        let m = mapper(4.0, 4.0, MarginPolicy::Proportional(0.1), 100, 100, 1);
        assert_eq!(m.value_to_y(4.0), 50);
        assert_eq!(m.zero_y(), 50);
    }

    #[test]
    fn index_edges_span_width() {
        let static_map = mapper(3.0, 1.0, MarginPolicy::Proportional(0.1), 300, 100, 3);
        assert_eq!(static_map.index_to_x(0), 0);
        assert_eq!(static_map.index_to_x(1), 100);
        assert_eq!(static_map.index_to_x(3), 300);

        let streaming = mapper(1.0, -1.0, MarginPolicy::Fixed(1.0), 720, 100, 720);
        assert_eq!(streaming.index_to_x(0), 0);
        assert_eq!(streaming.index_to_x(360), 360);
        assert_eq!(streaming.index_to_x(720), 720);
    }

    #[test]
    fn far_values_clamp_to_pixel_range() {
        let above = mapper(1.0e7 + 1.0, 1.0e7, MarginPolicy::Proportional(0.1), 100, 400, 2);
        assert_eq!(above.zero_y(), 800);
        let below = mapper(-1.0e7, -1.0e7 - 1.0, MarginPolicy::Fixed(1.0), 100, 400, 2);
        assert_eq!(below.zero_y(), -400);
        assert_eq!(below.value_to_y(-1.0e7), 0);
    }

    #[test]
    fn zero_geometry_does_not_panic() {
        let m = mapper(1.0, -1.0, MarginPolicy::Fixed(1.0), 0, 0, 0);
        assert_eq!(m.index_to_x(5), 0);
        assert_eq!(m.value_to_y(0.3), 0);
    }
}
