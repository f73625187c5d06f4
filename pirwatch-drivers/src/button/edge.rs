//! Edge-flagged push-button
//!
//! The button's edge interrupt records presses and releases into a shared
//! [`ButtonEdges`]. This handle is the consumer side owned by the alarm.

use pirwatch_core::shared::ButtonEdges;
use pirwatch_core::traits::Button;

/// Push-button read through interrupt-set edge flags
pub struct EdgeButton<'a> {
    edges: &'a ButtonEdges,
}

impl<'a> EdgeButton<'a> {
    /// Create a button over the given edge flags
    pub fn new(edges: &'a ButtonEdges) -> Self {
        Self { edges }
    }

    /// Get the underlying edge flags
    pub fn edges(&self) -> &'a ButtonEdges {
        self.edges
    }
}

impl Button for EdgeButton<'_> {
    fn init(&mut self) {
        // Drop edges latched before the alarm existed
        self.edges.clear();
    }

    fn pressed(&self) -> bool {
        self.edges.pressed()
    }

    fn released(&self) -> bool {
        self.edges.released()
    }

    fn clear_edges(&mut self) {
        self.edges.clear();
    }
}
