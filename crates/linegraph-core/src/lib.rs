// File: crates/linegraph-core/src/lib.rs
// Summary: Core library entry point; exports the graph component, its building blocks and PNG export.

pub mod config;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod inspector;
pub mod raster;
pub mod redraw;
pub mod render;
pub mod scale;
pub mod series;
pub mod surface;
pub mod text;
pub mod ticks;
pub mod types;

pub use skia_safe::Color;

pub use config::{GraphConfiguration, LabelFont, Palette};
pub use error::ExportError;
pub use geometry::{RectI32, ViewGeometry};
pub use graph::GraphComponent;
pub use inspector::InspectorState;
pub use raster::{render_to_png, render_to_png_bytes, RasterSurface};
pub use redraw::{NoRedraw, RedrawFlag, RedrawRequester};
pub use scale::CoordinateMapper;
pub use series::{Bounds, MarginPolicy, SeriesBuffer, SeriesMode};
pub use surface::{DrawCall, DrawSurface, RecordingSurface};
pub use ticks::{plan_ticks, Tick};
