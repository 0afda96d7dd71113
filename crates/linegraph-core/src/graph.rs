// File: crates/linegraph-core/src/graph.rs
// Summary: Graph component: owns the series, configuration handle, view geometry and inspector,
// and exposes the producer, host-notification and render entry points.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace};

use crate::config::GraphConfiguration;
use crate::geometry::ViewGeometry;
use crate::inspector::InspectorState;
use crate::redraw::{NoRedraw, RedrawRequester};
use crate::render::render_frame;
use crate::scale::CoordinateMapper;
use crate::series::{Bounds, SeriesBuffer, SeriesMode};
use crate::surface::DrawSurface;
use crate::types::DEFAULT_SAMPLE_COUNT;

/// A line graph of one numeric series.
///
/// Shareable across one producer thread and one rendering thread (`Arc<GraphComponent>`).
/// Appends, including eviction and bound updates, and the whole render traversal each hold the
/// series lock, so a frame always shows a consistent prefix of the appended samples.
pub struct GraphComponent {
    series: Mutex<SeriesBuffer>,
    config: RwLock<Arc<GraphConfiguration>>,
    geometry: Mutex<ViewGeometry>,
    inspector: Mutex<InspectorState>,
    redraw: Arc<dyn RedrawRequester>,
}

impl GraphComponent {
    pub fn new(series: SeriesBuffer, config: GraphConfiguration) -> Self {
        Self {
            series: Mutex::new(series),
            config: RwLock::new(Arc::new(config)),
            geometry: Mutex::new(ViewGeometry::default()),
            inspector: Mutex::new(InspectorState::default()),
            redraw: Arc::new(NoRedraw),
        }
    }

    /// Scrolling graph showing the most recent [`DEFAULT_SAMPLE_COUNT`] samples.
    pub fn streaming(config: GraphConfiguration) -> Self {
        Self::new(SeriesBuffer::streaming(DEFAULT_SAMPLE_COUNT), config)
    }

    /// Static graph preloaded with `values`.
    pub fn for_values<I, T>(values: I, config: GraphConfiguration) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        let graph = Self::new(SeriesBuffer::unbounded(), config);
        graph.append_batch(values);
        graph
    }

    /// Route redraw requests to the hosting container.
    pub fn with_redraw(mut self, redraw: Arc<dyn RedrawRequester>) -> Self {
        self.redraw = redraw;
        self
    }

    pub fn mode(&self) -> SeriesMode {
        self.series.lock().mode()
    }

    // ---- producer --------------------------------------------------------------

    /// Append one sample and request a redraw.
    pub fn append(&self, value: impl Into<f64>) {
        let value = value.into();
        {
            let mut series = self.series.lock();
            series.append(value);
            trace!(value, len = series.len(), "sample appended");
        }
        self.redraw.request_redraw();
    }

    /// Append every value under one lock acquisition and request a single redraw afterwards.
    /// Returns how many samples were appended.
    pub fn append_batch<I, T>(&self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        let appended = self.series.lock().extend(values.into_iter().map(Into::into));
        debug!(appended, "sample batch loaded");
        self.redraw.request_redraw();
        appended
    }

    /// Set how many samples a streaming graph keeps; excess samples are evicted immediately.
    pub fn set_sample_count(&self, sample_count: usize) {
        self.series.lock().set_sample_count(sample_count);
        debug!(sample_count, "sample count changed");
        self.redraw.request_redraw();
    }

    /// Lower bound for the top of the value range. Larger samples still widen it.
    pub fn set_maximum(&self, maximum: f64) {
        self.series.lock().set_maximum(maximum);
        self.redraw.request_redraw();
    }

    /// Upper bound for the bottom of the value range. Smaller samples still widen it.
    pub fn set_minimum(&self, minimum: f64) {
        self.series.lock().set_minimum(minimum);
        self.redraw.request_redraw();
    }

    pub fn set_margin(&self, margin: f64) {
        self.series.lock().set_margin(margin);
        self.redraw.request_redraw();
    }

    pub fn bounds(&self) -> Bounds {
        self.series.lock().bounds()
    }

    pub fn len(&self) -> usize {
        self.series.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.lock().is_empty()
    }

    pub fn sample_count(&self) -> usize {
        self.series.lock().sample_count()
    }

    pub fn last_sample_index(&self) -> u64 {
        self.series.lock().last_sample_index()
    }

    /// Copy of the stored samples, oldest first.
    pub fn values(&self) -> Vec<f64> {
        self.series.lock().iter().collect()
    }

    // ---- configuration ---------------------------------------------------------

    /// Swap the whole configuration; the next frame uses it.
    pub fn set_configuration(&self, config: GraphConfiguration) {
        debug!(label = %config.label, "configuration replaced");
        *self.config.write() = Arc::new(config);
        self.redraw.request_redraw();
    }

    /// The configuration handle the next frame will read.
    pub fn configuration(&self) -> Arc<GraphConfiguration> {
        Arc::clone(&self.config.read())
    }

    // ---- host notifications ----------------------------------------------------

    pub fn on_resize(&self, width: i32, height: i32) {
        let geometry = ViewGeometry::new(width, height);
        *self.geometry.lock() = geometry;
        debug!(width = geometry.width, height = geometry.height, "graph resized");
        self.redraw.request_redraw();
    }

    pub fn geometry(&self) -> ViewGeometry {
        *self.geometry.lock()
    }

    /// Track the pointer for the inspector. Ignored while the inspector is disabled.
    pub fn on_pointer_move(&self, x: i32) {
        if !self.config.read().enable_inspector {
            return;
        }
        self.inspector.lock().pointer_moved(x);
        self.redraw.request_redraw();
    }

    /// Hide the inspector readout. Ignored while the inspector is disabled.
    pub fn on_pointer_exit(&self) {
        if !self.config.read().enable_inspector {
            return;
        }
        self.inspector.lock().pointer_exited();
        self.redraw.request_redraw();
    }

    pub fn inspector(&self) -> InspectorState {
        *self.inspector.lock()
    }

    // ---- rendering -------------------------------------------------------------

    /// Mapper for the current bounds and geometry, for hit-testing outside a frame.
    pub fn mapper(&self) -> CoordinateMapper {
        let geometry = self.geometry();
        CoordinateMapper::for_series(&self.series.lock(), geometry)
    }

    /// Paint a full frame. The configuration handle is read once; the series lock is held for the
    /// whole traversal.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let config = self.configuration();
        let geometry = self.geometry();
        let inspector = self.inspector();
        let series = self.series.lock();
        render_frame(surface, &series, &config, geometry, inspector);
    }
}

impl Default for GraphComponent {
    fn default() -> Self {
        Self::streaming(GraphConfiguration::default())
    }
}
