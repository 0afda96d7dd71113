// File: crates/linegraph-core/src/text.rs
// Summary: Text shaping for raster export using Skia textlayout with font-family fallbacks.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use crate::config::LabelFont;

const FALLBACK_FAMILIES: [&str; 5] = ["Segoe UI", "Arial", "Helvetica", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &LabelFont, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(color);
        let mut families = vec![font.family.as_str()];
        families.extend(FALLBACK_FAMILIES.iter().filter(|f| !f.eq_ignore_ascii_case(&font.family)));
        ts.set_font_families(&families);
        ts
    }

    pub fn layout(&self, text: &str, font: &LabelFont, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline starting at `(x, y)`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, font: &LabelFont, color: skia::Color) {
        let mut paragraph = self.layout(text, font, color);
        // Paragraphs paint from their top-left; lift by the ascent.
        paragraph.paint(canvas, (x, y - paragraph.alphabetic_baseline()));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
