// File: crates/linegraph-core/src/geometry.rs
// Summary: Integer pixel geometry: rectangles, points and the drawable view size.

/// Pixel position on the drawing surface, origin at the top-left corner.
pub type PointI32 = (i32, i32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

/// Size of the drawable area, updated by the hosting surface on resize.
/// Contract: both fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewGeometry {
    pub width: i32,
    pub height: i32,
}

impl ViewGeometry {
    /// Create a geometry, clamping negative sizes to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width: width.max(0), height: height.max(0) }
    }

    /// True until the surface has been laid out with a non-zero area.
    pub const fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }

    /// The full drawable rectangle anchored at the origin.
    pub const fn bounds(&self) -> RectI32 { RectI32::from_ltwh(0, 0, self.width, self.height) }
}
