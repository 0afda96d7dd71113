// File: crates/linegraph-core/src/surface.rs
// Summary: Drawing-surface contract the renderer paints through, plus a recording implementation.

use skia_safe as skia;

use crate::config::LabelFont;
use crate::geometry::{PointI32, RectI32};

/// Primitives a hosting surface must provide. Coordinates are integer pixels, origin top-left.
///
/// Drawing is stateful like a classic 2D graphics context: `set_color` and `set_font` apply to
/// every following call until changed.
pub trait DrawSurface {
    fn set_color(&mut self, color: skia::Color);
    fn set_font(&mut self, font: &LabelFont);
    fn fill_rect(&mut self, rect: RectI32);
    fn stroke_rect(&mut self, rect: RectI32);
    fn draw_line(&mut self, from: PointI32, to: PointI32);
    fn draw_circle(&mut self, center: PointI32, radius: i32);
    /// Draw `text` with its baseline starting at `origin`.
    fn draw_text(&mut self, text: &str, origin: PointI32);
    /// Current drawable size `(width, height)`.
    fn size(&self) -> (i32, i32);
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    SetColor(skia::Color),
    SetFont(LabelFont),
    FillRect(RectI32),
    StrokeRect(RectI32),
    Line(PointI32, PointI32),
    Circle(PointI32, i32),
    Text(String, PointI32),
}

/// Surface that records calls instead of rasterizing; for tests and for hosts that replay frames.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub width: i32,
    pub height: i32,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, calls: Vec::new() }
    }

    /// Drop recorded calls, keeping the size.
    pub fn clear(&mut self) { self.calls.clear(); }

    pub fn lines(&self) -> impl Iterator<Item = (PointI32, PointI32)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Line(a, b) => Some((*a, *b)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, PointI32)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text(s, p) => Some((s.as_str(), *p)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn set_color(&mut self, color: skia::Color) { self.calls.push(DrawCall::SetColor(color)); }
    fn set_font(&mut self, font: &LabelFont) { self.calls.push(DrawCall::SetFont(font.clone())); }
    fn fill_rect(&mut self, rect: RectI32) { self.calls.push(DrawCall::FillRect(rect)); }
    fn stroke_rect(&mut self, rect: RectI32) { self.calls.push(DrawCall::StrokeRect(rect)); }
    fn draw_line(&mut self, from: PointI32, to: PointI32) { self.calls.push(DrawCall::Line(from, to)); }
    fn draw_circle(&mut self, center: PointI32, radius: i32) { self.calls.push(DrawCall::Circle(center, radius)); }
    fn draw_text(&mut self, text: &str, origin: PointI32) { self.calls.push(DrawCall::Text(text.to_owned(), origin)); }
    fn size(&self) -> (i32, i32) { (self.width, self.height) }
}
