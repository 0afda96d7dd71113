// File: crates/linegraph-core/src/series.rs
// Summary: Series buffer for streaming (bounded rolling window) and static (unbounded) graphs,
// with incrementally tracked value bounds.

use std::collections::VecDeque;

use crate::types::{DEFAULT_SAMPLE_COUNT, INITIAL_MAXIMUM, INITIAL_MINIMUM, STATIC_MARGIN, STREAMING_MARGIN};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesMode {
    /// Rolling window of the most recent `sample_count` samples.
    Streaming,
    /// Every sample ever appended, stretched across the full width.
    Static,
}

/// How the vertical margin keeps the trace off the top and bottom edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarginPolicy {
    /// Value units folded into the stored bounds when a sample crosses them.
    Fixed(f64),
    /// Fraction of each value inset by the value mapping; stored bounds stay exact.
    Proportional(f64),
}

impl MarginPolicy {
    pub fn amount(self) -> f64 {
        match self {
            MarginPolicy::Fixed(m) | MarginPolicy::Proportional(m) => m,
        }
    }
}

impl SeriesMode {
    pub fn default_margin(self) -> MarginPolicy {
        match self {
            SeriesMode::Streaming => MarginPolicy::Fixed(STREAMING_MARGIN),
            SeriesMode::Static => MarginPolicy::Proportional(STATIC_MARGIN),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub maximum: f64,
    pub minimum: f64,
}

impl Bounds {
    pub const fn new(maximum: f64, minimum: f64) -> Self {
        Self { maximum, minimum }
    }

    pub fn span(&self) -> f64 { self.maximum - self.minimum }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(INITIAL_MAXIMUM, INITIAL_MINIMUM)
    }
}

/// Ordered samples plus running bounds.
///
/// Bounds are updated on append only and never shrink, so reads are O(1) and the axis does not
/// jitter when a spike scrolls out of a streaming window. Not synchronized on its own; a
/// [`GraphComponent`](crate::GraphComponent) guards it with a single lock.
#[derive(Clone, Debug)]
pub struct SeriesBuffer {
    mode: SeriesMode,
    samples: VecDeque<f64>,
    bounds: Bounds,
    margin: MarginPolicy,
    sample_count: usize,
    last_sample_index: u64,
    // Static graphs seed their bounds from the first sample unless set by hand.
    seeded: bool,
}

impl SeriesBuffer {
    pub fn new(mode: SeriesMode) -> Self {
        Self {
            mode,
            samples: VecDeque::new(),
            bounds: Bounds::default(),
            margin: mode.default_margin(),
            sample_count: DEFAULT_SAMPLE_COUNT,
            last_sample_index: 0,
            seeded: false,
        }
    }

    pub fn streaming(sample_count: usize) -> Self {
        let mut s = Self::new(SeriesMode::Streaming);
        s.sample_count = sample_count;
        s
    }

    pub fn unbounded() -> Self {
        Self::new(SeriesMode::Static)
    }

    pub fn mode(&self) -> SeriesMode { self.mode }
    pub fn bounds(&self) -> Bounds { self.bounds }
    pub fn margin(&self) -> MarginPolicy { self.margin }
    pub fn sample_count(&self) -> usize { self.sample_count }
    /// Count of all samples ever appended to a streaming buffer, including evicted ones.
    pub fn last_sample_index(&self) -> u64 { self.last_sample_index }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn get(&self, index: usize) -> Option<f64> { self.samples.get(index).copied() }
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ { self.samples.iter().copied() }

    /// Logical position of the oldest sample still stored.
    pub fn first_visible_index(&self) -> u64 {
        self.last_sample_index.saturating_sub(self.sample_count as u64)
    }

    /// Number of logical positions spanning the full width: the window capacity when streaming,
    /// the stored length when static.
    pub fn x_divisor(&self) -> usize {
        match self.mode {
            SeriesMode::Streaming => self.sample_count,
            SeriesMode::Static => self.samples.len(),
        }
    }

    pub fn append(&mut self, value: f64) {
        self.samples.push_back(value);
        if self.mode == SeriesMode::Streaming {
            self.last_sample_index += 1;
            self.trim();
        }
        self.widen_bounds(value);
    }

    /// Append every value in order; returns how many were appended.
    pub fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) -> usize {
        let mut n = 0;
        for v in values {
            self.append(v);
            n += 1;
        }
        n
    }

    /// Change the streaming window size, evicting the oldest samples that no longer fit.
    pub fn set_sample_count(&mut self, sample_count: usize) {
        self.sample_count = sample_count;
        if self.mode == SeriesMode::Streaming {
            self.trim();
        }
    }

    /// Override the upper bound. Later samples above it still widen it.
    pub fn set_maximum(&mut self, maximum: f64) {
        self.bounds.maximum = maximum;
        self.seeded = true;
    }

    /// Override the lower bound. Later samples below it still widen it.
    pub fn set_minimum(&mut self, minimum: f64) {
        self.bounds.minimum = minimum;
        self.seeded = true;
    }

    /// Replace the margin amount, keeping the mode's policy kind.
    pub fn set_margin(&mut self, margin: f64) {
        self.margin = match self.margin {
            MarginPolicy::Fixed(_) => MarginPolicy::Fixed(margin),
            MarginPolicy::Proportional(_) => MarginPolicy::Proportional(margin),
        };
    }

    fn trim(&mut self) {
        while self.samples.len() > self.sample_count {
            self.samples.pop_front();
        }
    }

    fn widen_bounds(&mut self, value: f64) {
        match self.margin {
            MarginPolicy::Fixed(margin) => {
                if value > self.bounds.maximum - margin {
                    self.bounds.maximum = value + margin;
                }
                if value < self.bounds.minimum + margin {
                    self.bounds.minimum = value - margin;
                }
            }
            MarginPolicy::Proportional(_) => {
                if !self.seeded {
                    self.bounds = Bounds::new(value, value);
                    self.seeded = true;
                    return;
                }
                if value > self.bounds.maximum {
                    self.bounds.maximum = value;
                }
                if value < self.bounds.minimum {
                    self.bounds.minimum = value;
                }
            }
        }
    }
}
