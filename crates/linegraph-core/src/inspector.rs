// File: crates/linegraph-core/src/inspector.rs
// Summary: Pointer tracking for the static-graph hover readout.

/// Last known horizontal pointer position over the graph, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InspectorState {
    pointer_x: Option<i32>,
}

impl InspectorState {
    pub fn pointer_x(&self) -> Option<i32> { self.pointer_x }

    pub fn pointer_moved(&mut self, x: i32) { self.pointer_x = Some(x); }

    pub fn pointer_exited(&mut self) { self.pointer_x = None; }

    /// Whether the segment ending at `x` and starting after `last_x` is under the pointer.
    /// The interval is half-open, `(last_x, x]`, so adjacent segments never both match.
    pub fn hovers(&self, last_x: i32, x: i32) -> bool {
        matches!(self.pointer_x, Some(px) if px > last_x && px <= x)
    }
}
