// File: crates/linegraph-core/src/raster.rs
// Summary: Skia CPU raster surface implementing `DrawSurface`, and PNG export of a graph.

use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::config::LabelFont;
use crate::error::ExportError;
use crate::geometry::{PointI32, RectI32};
use crate::surface::DrawSurface;
use crate::text::TextShaper;
use crate::GraphComponent;

/// Offscreen raster target of a fixed size.
pub struct RasterSurface {
    surface: skia::Surface,
    paint: skia::Paint,
    font: LabelFont,
    shaper: TextShaper,
    width: i32,
    height: i32,
}

impl RasterSurface {
    pub fn new(width: i32, height: i32) -> Result<Self, ExportError> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ExportError::Surface { width, height })?;
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_stroke_width(1.0);
        paint.set_color(skia::Color::BLACK);
        Ok(Self { surface, paint, font: LabelFont::default(), shaper: TextShaper::new(), width, height })
    }

    /// Encode the current contents as PNG.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>, ExportError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ExportError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn save_png(&mut self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes()?;
        let io = |source| ExportError::Io { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        std::fs::write(path, bytes).map_err(io)?;
        debug!(path = %path.display(), "wrote PNG");
        Ok(())
    }
}

fn to_rect(rect: RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32)
}

fn to_point((x, y): PointI32) -> skia::Point {
    skia::Point::new(x as f32, y as f32)
}

impl DrawSurface for RasterSurface {
    fn set_color(&mut self, color: skia::Color) {
        self.paint.set_color(color);
    }

    fn set_font(&mut self, font: &LabelFont) {
        self.font = font.clone();
    }

    fn fill_rect(&mut self, rect: RectI32) {
        self.paint.set_style(skia::paint::Style::Fill);
        self.surface.canvas().draw_rect(to_rect(rect), &self.paint);
    }

    fn stroke_rect(&mut self, rect: RectI32) {
        self.paint.set_style(skia::paint::Style::Stroke);
        self.surface.canvas().draw_rect(to_rect(rect), &self.paint);
    }

    fn draw_line(&mut self, from: PointI32, to: PointI32) {
        self.surface.canvas().draw_line(to_point(from), to_point(to), &self.paint);
    }

    fn draw_circle(&mut self, center: PointI32, radius: i32) {
        self.paint.set_style(skia::paint::Style::Stroke);
        self.surface.canvas().draw_circle(to_point(center), radius as f32, &self.paint);
    }

    fn draw_text(&mut self, text: &str, (x, y): PointI32) {
        let color = self.paint.color();
        let canvas = self.surface.canvas();
        self.shaper.draw_left(canvas, text, x as f32, y as f32, &self.font, color);
    }

    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

/// Render `graph` at its current geometry and return PNG bytes.
pub fn render_to_png_bytes(graph: &GraphComponent) -> Result<Vec<u8>, ExportError> {
    let geometry = graph.geometry();
    let mut surface = RasterSurface::new(geometry.width, geometry.height)?;
    graph.render(&mut surface);
    surface.to_png_bytes()
}

/// Render `graph` at its current geometry into a PNG file at `path`.
pub fn render_to_png(graph: &GraphComponent, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let geometry = graph.geometry();
    let mut surface = RasterSurface::new(geometry.width, geometry.height)?;
    graph.render(&mut surface);
    surface.save_png(path)
}
