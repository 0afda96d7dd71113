// File: crates/linegraph-core/src/ticks.rs
// Summary: Tick placement along the horizontal axis and tick-label selection.

use crate::config::GraphConfiguration;
use crate::scale::CoordinateMapper;
use crate::series::{SeriesBuffer, SeriesMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// Logical position: an offset from the first visible sample when streaming, the sample
    /// index itself in a static series.
    pub position: u64,
    /// Horizontal pixel of the tick mark.
    pub x: i32,
    /// Whether the position is written under the mark.
    pub labeled: bool,
}

/// Plan the ticks for one frame. Empty when ticks are disabled or the x scale is undefined.
pub fn plan_ticks(series: &SeriesBuffer, mapper: &CoordinateMapper, config: &GraphConfiguration) -> Vec<Tick> {
    let distance = u64::from(config.tick_distance);
    if distance == 0 || mapper.x_divisor == 0 {
        return Vec::new();
    }
    match series.mode() {
        SeriesMode::Streaming => streaming_ticks(series.first_visible_index(), distance, mapper),
        SeriesMode::Static => static_ticks(distance, mapper, config),
    }
}

/// Ticks stay on multiples of `distance` in absolute sample numbering, so they scroll with the
/// trace instead of sliding as old samples are evicted.
pub fn streaming_ticks(first_visible: u64, distance: u64, mapper: &CoordinateMapper) -> Vec<Tick> {
    let start = distance - first_visible % distance;
    collect_ticks(start, distance, mapper, |_| false)
}

/// Ticks from position 0, labeled per the configuration's skip policy.
pub fn static_ticks(distance: u64, mapper: &CoordinateMapper, config: &GraphConfiguration) -> Vec<Tick> {
    collect_ticks(0, distance, mapper, |p| config.is_tick_label_location(p))
}

fn collect_ticks(
    start: u64,
    distance: u64,
    mapper: &CoordinateMapper,
    labeled: impl Fn(u64) -> bool,
) -> Vec<Tick> {
    let width = mapper.geometry.width;
    let mut out = Vec::new();
    let mut position = start;
    loop {
        let x = mapper.index_to_x(position);
        if x >= width {
            break;
        }
        out.push(Tick { position, x, labeled: labeled(position) });
        position += distance;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ViewGeometry;

    fn static_series(n: usize) -> SeriesBuffer {
        let mut s = SeriesBuffer::unbounded();
        s.extend((0..n).map(|i| i as f64));
        s
    }

    #[test]
    fn static_labels_every_fifth_multiple() {
        let s = static_series(1000);
        let m = CoordinateMapper::for_series(&s, ViewGeometry::new(1000, 100));
        let ticks = plan_ticks(&s, &m, &GraphConfiguration::default());
        assert_eq!(ticks.len(), 20);
        assert_eq!(ticks[1], Tick { position: 50, x: 50, labeled: false });
        let labeled: Vec<u64> = ticks.iter().filter(|t| t.labeled).map(|t| t.position).collect();
        assert_eq!(labeled, vec![0, 200, 400, 600, 800]);
    }

    #[test]
    fn static_ticks_stretch_with_series_length() {
        let s = static_series(100);
        let m = CoordinateMapper::for_series(&s, ViewGeometry::new(400, 100));
        let config = GraphConfiguration { tick_distance: 25, ..Default::default() };
        let xs: Vec<i32> = plan_ticks(&s, &m, &config).iter().map(|t| t.x).collect();
        assert_eq!(xs, vec![0, 100, 200, 300]);
    }

    #[test]
    fn streaming_ticks_follow_absolute_index() {
        let mut s = SeriesBuffer::streaming(100);
        s.extend((0..130).map(|i| i as f64));
        let m = CoordinateMapper::for_series(&s, ViewGeometry::new(200, 100));
        let ticks = plan_ticks(&s, &m, &GraphConfiguration::default());
        assert_eq!(
            ticks,
            vec![
                Tick { position: 20, x: 40, labeled: false },
                Tick { position: 70, x: 140, labeled: false },
            ]
        );

        s.append(130.0);
        let m = CoordinateMapper::for_series(&s, ViewGeometry::new(200, 100));
        for t in plan_ticks(&s, &m, &GraphConfiguration::default()) {
            assert_eq!((s.first_visible_index() + t.position) % 50, 0);
        }
    }

    #[test]
    fn streaming_window_not_yet_full() {
        let mut s = SeriesBuffer::streaming(100);
        s.extend([1.0, 2.0]);
        let m = CoordinateMapper::for_series(&s, ViewGeometry::new(100, 50));
        let positions: Vec<u64> = plan_ticks(&s, &m, &GraphConfiguration::default()).iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![50]);
    }

    #[test]
    fn disabled_or_degenerate_yields_nothing() {
        let s = static_series(10);
        let m = CoordinateMapper::for_series(&s, ViewGeometry::new(100, 50));
        let off = GraphConfiguration { tick_distance: 0, ..Default::default() };
        assert!(plan_ticks(&s, &m, &off).is_empty());

        let empty = SeriesBuffer::unbounded();
        let m = CoordinateMapper::for_series(&empty, ViewGeometry::new(100, 50));
        assert!(plan_ticks(&empty, &m, &GraphConfiguration::default()).is_empty());

        let m = CoordinateMapper::for_series(&s, ViewGeometry::new(0, 0));
        assert!(plan_ticks(&s, &m, &GraphConfiguration::default()).is_empty());
    }
}
