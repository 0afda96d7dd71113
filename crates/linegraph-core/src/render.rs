// File: crates/linegraph-core/src/render.rs
// Summary: Frame renderer: background, border, axis, ticks, title, trace and inspector overlay.

use crate::config::GraphConfiguration;
use crate::geometry::{PointI32, ViewGeometry};
use crate::inspector::InspectorState;
use crate::scale::CoordinateMapper;
use crate::series::{SeriesBuffer, SeriesMode};
use crate::surface::DrawSurface;
use crate::ticks::plan_ticks;
use crate::types::{INSPECTOR_MARKER_RADIUS, TICK_LABEL_GAP, TICK_LENGTH};

/// Paint one complete frame of `series` onto `surface`.
///
/// The caller must keep `series` stable for the whole call; [`GraphComponent::render`]
/// holds the series lock around it. Nothing is drawn while the geometry is empty.
///
/// [`GraphComponent::render`]: crate::GraphComponent::render
pub fn render_frame<S: DrawSurface + ?Sized>(
    surface: &mut S,
    series: &SeriesBuffer,
    config: &GraphConfiguration,
    geometry: ViewGeometry,
    inspector: InspectorState,
) {
    if geometry.is_empty() {
        return;
    }
    let mapper = CoordinateMapper::for_series(series, geometry);
    // The axis moves as the bounds widen; compute it once per frame.
    let y0 = mapper.zero_y();

    surface.set_color(config.background);
    surface.fill_rect(geometry.bounds());
    surface.set_color(config.border);
    surface.stroke_rect(geometry.bounds());

    surface.set_color(config.axis);
    surface.set_font(&config.label_font);
    surface.draw_line((0, y0), (geometry.width, y0));

    if !series.is_empty() {
        draw_ticks(surface, series, &mapper, config, y0);
    }
    if !config.label.is_empty() {
        surface.draw_text(&config.label, (1, y0.saturating_sub(2)));
    }

    surface.set_color(config.line);
    let inspect = series.mode() == SeriesMode::Static && config.enable_inspector;
    draw_trace(surface, series, &mapper, config, y0, inspect.then_some(inspector));
}

fn draw_ticks<S: DrawSurface + ?Sized>(
    surface: &mut S,
    series: &SeriesBuffer,
    mapper: &CoordinateMapper,
    config: &GraphConfiguration,
    y0: i32,
) {
    let label_y = y0
        .saturating_add(TICK_LABEL_GAP)
        .saturating_add(config.label_font.size as i32);
    for tick in plan_ticks(series, mapper, config) {
        surface.draw_line((tick.x, y0), (tick.x, y0.saturating_add(TICK_LENGTH)));
        if tick.labeled {
            surface.draw_text(&tick.position.to_string(), (tick.x, label_y));
        }
    }
}

fn draw_trace<S: DrawSurface + ?Sized>(
    surface: &mut S,
    series: &SeriesBuffer,
    mapper: &CoordinateMapper,
    config: &GraphConfiguration,
    y0: i32,
    inspector: Option<InspectorState>,
) {
    let mut samples = series.iter().enumerate();
    let Some((_, first)) = samples.next() else { return };
    let mut last = (mapper.index_to_x(0), mapper.value_to_y(first));

    for (i, value) in samples {
        let point = (mapper.index_to_x(i as u64), mapper.value_to_y(value));
        surface.draw_line(last, point);
        if inspector.is_some_and(|s| s.hovers(last.0, point.0)) {
            draw_inspector(surface, config, point, y0, i, value);
        }
        last = point;
    }
}

fn draw_inspector<S: DrawSurface + ?Sized>(
    surface: &mut S,
    config: &GraphConfiguration,
    (x, y): PointI32,
    y0: i32,
    index: usize,
    value: f64,
) {
    surface.set_color(config.inspector);
    surface.draw_circle((x, y), INSPECTOR_MARKER_RADIUS);
    surface.draw_line((x, y), (0, y));
    surface.draw_text(&value.to_string(), (1, y.saturating_sub(2)));
    surface.draw_line((x, y), (x, y0));
    surface.draw_text(&index.to_string(), (x.saturating_add(2), y0.saturating_sub(3)));
    surface.set_color(config.line);
}
