// File: crates/linegraph-core/src/config.rs
// Summary: Visual configuration for a graph (colors, label font and text, tick and inspector policy).

use skia_safe as skia;

/// Font used for the title, tick labels and inspector readouts.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelFont {
    pub family: String,
    /// Size in pixels; also used as the line height when placing tick labels.
    pub size: f32,
}

impl LabelFont {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self { family: family.into(), size }
    }
}

impl Default for LabelFont {
    fn default() -> Self {
        Self::new("sans-serif", 10.0)
    }
}

/// The five colors a graph paints with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub background: skia::Color,
    pub border: skia::Color,
    pub line: skia::Color,
    pub axis: skia::Color,
    pub inspector: skia::Color,
}

impl Palette {
    /// Dark gray panel, white trace, red inspector.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 64, 64, 64),
            border: skia::Color::from_argb(255, 64, 64, 64),
            line: skia::Color::from_argb(255, 255, 255, 255),
            axis: skia::Color::from_argb(255, 192, 192, 192),
            inspector: skia::Color::from_argb(255, 255, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            border: skia::Color::from_argb(255, 40, 40, 45),
            line: skia::Color::from_argb(255, 64, 160, 255),
            axis: skia::Color::from_argb(255, 180, 180, 190),
            inspector: skia::Color::from_argb(255, 255, 230, 70),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            border: skia::Color::from_argb(255, 230, 230, 235),
            line: skia::Color::from_argb(255, 32, 120, 200),
            axis: skia::Color::from_argb(255, 60, 60, 70),
            inspector: skia::Color::from_argb(255, 200, 60, 60),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            border: skia::Color::from_argb(255, 0x07, 0x36, 0x42),     // base02
            line: skia::Color::from_argb(255, 0x26, 0x8b, 0xd2),       // blue
            axis: skia::Color::from_argb(255, 0x93, 0xa1, 0xa1),       // base1
            inspector: skia::Color::from_argb(255, 0xb5, 0x89, 0x00),  // yellow
        }
    }
}

/// Return the built-in palettes.
pub fn palettes() -> Vec<Palette> {
    vec![Palette::classic(), Palette::dark(), Palette::light(), Palette::solarized_dark()]
}

/// Find a palette by `name`, falling back to classic.
pub fn find_palette(name: &str) -> Palette {
    palettes()
        .into_iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Palette::classic)
}

/// Visual parameters for one graph.
///
/// A graph holds its configuration behind a shared handle and reads it once per redraw, so
/// derive variants by cloning a base value and swapping the clone in with
/// [`GraphComponent::set_configuration`](crate::GraphComponent::set_configuration).
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfiguration {
    pub background: skia::Color,
    pub border: skia::Color,
    pub line: skia::Color,
    pub axis: skia::Color,
    pub inspector: skia::Color,
    pub label_font: LabelFont,
    /// Title drawn just above the axis at the left edge.
    pub label: String,
    /// Logical units between ticks; zero disables ticks.
    pub tick_distance: u32,
    /// Ticks skipped between labeled ticks (static graphs only).
    pub tick_skip: u32,
    pub enable_tick_labels: bool,
    /// Hover readout (static graphs only).
    pub enable_inspector: bool,
}

impl Default for GraphConfiguration {
    fn default() -> Self {
        Self::from_palette(&Palette::classic())
    }
}

impl GraphConfiguration {
    /// Default configuration carrying a title.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self { label: label.into(), ..Self::default() }
    }

    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            background: palette.background,
            border: palette.border,
            line: palette.line,
            axis: palette.axis,
            inspector: palette.inspector,
            label_font: LabelFont::default(),
            label: String::new(),
            tick_distance: 50,
            tick_skip: 4,
            enable_tick_labels: true,
            enable_inspector: true,
        }
    }

    /// Replace all five colors, keeping every other setting.
    pub fn apply_palette(&mut self, palette: &Palette) {
        self.background = palette.background;
        self.border = palette.border;
        self.line = palette.line;
        self.axis = palette.axis;
        self.inspector = palette.inspector;
    }

    /// Whether a static-graph tick at logical position `position` carries a text label.
    ///
    /// Labels fall on multiples of `tick_distance * tick_skip`. A zero product (no skipping)
    /// labels every tick.
    pub fn is_tick_label_location(&self, position: u64) -> bool {
        if !self.enable_tick_labels {
            return false;
        }
        let every = u64::from(self.tick_distance) * u64::from(self.tick_skip);
        let every = if every == 0 { u64::from(self.tick_distance) } else { every };
        every == 0 || position % every == 0
    }
}
