// File: crates/linegraph-core/src/types.rs
// Summary: Shared constants (default capacity, margins, tick and marker geometry).

/// Default number of samples visible in a streaming graph.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Initial value bounds before any sample arrives.
pub const INITIAL_MAXIMUM: f64 = 1.0;
pub const INITIAL_MINIMUM: f64 = -1.0;

/// Fixed margin, in value units, kept between a streaming sample and the bound it pushes.
pub const STREAMING_MARGIN: f64 = 1.0;
/// Proportional inset applied by the static value mapping (fraction of the value).
pub const STATIC_MARGIN: f64 = 0.1;

/// Length of a tick mark below the axis, in pixels.
pub const TICK_LENGTH: i32 = 2;
/// Gap between a tick mark and its label baseline, added to the font size.
pub const TICK_LABEL_GAP: i32 = 3;
/// Radius of the inspector marker circle.
pub const INSPECTOR_MARKER_RADIUS: i32 = 2;

