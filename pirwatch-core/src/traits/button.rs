//! Push-button trait

/// Trait for an edge-flagged push-button
///
/// The `pressed` and `released` flags are raised from interrupt context by
/// the edge detector. Only the consumer of a click clears them.
pub trait Button {
    /// Prepare the button for use
    ///
    /// Called exactly once when the owning state machine is built.
    fn init(&mut self);

    /// Check if a press edge is pending
    fn pressed(&self) -> bool;

    /// Check if a release edge is pending
    fn released(&self) -> bool;

    /// Check if a full press-then-release click is pending
    fn clicked(&self) -> bool {
        self.released() && !self.pressed()
    }

    /// Consume both edge flags
    fn clear_edges(&mut self);
}
