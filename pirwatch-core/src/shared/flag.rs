//! Interrupt-set boolean flags

use portable_atomic::{AtomicBool, Ordering};

/// Boolean flag written from one context and read from another
#[derive(Debug, Default)]
pub struct SharedFlag(AtomicBool);

impl SharedFlag {
    /// Create a cleared flag
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Raise the flag
    pub fn set(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Lower the flag
    pub fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Store a level
    pub fn write(&self, level: bool) {
        self.0.store(level, Ordering::Release);
    }

    /// Lower the flag, returning whether it was raised
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }

    /// Check if the flag is raised
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Press and release edges of a push-button
///
/// The edge detector calls [`record_press`](Self::record_press) and
/// [`record_release`](Self::record_release). A release only counts when a
/// press preceded it, so a completed click reads as `released && !pressed`.
#[derive(Debug, Default)]
pub struct ButtonEdges {
    pressed: SharedFlag,
    released: SharedFlag,
}

impl ButtonEdges {
    /// Create with both edges cleared
    pub const fn new() -> Self {
        Self {
            pressed: SharedFlag::new(),
            released: SharedFlag::new(),
        }
    }

    /// Record a press edge
    pub fn record_press(&self) {
        self.pressed.set();
    }

    /// Record a release edge, completing the click if a press is pending
    pub fn record_release(&self) {
        if self.pressed.take() {
            self.released.set();
        }
    }

    /// Check if a press edge is pending
    pub fn pressed(&self) -> bool {
        self.pressed.is_set()
    }

    /// Check if a release edge is pending
    pub fn released(&self) -> bool {
        self.released.is_set()
    }

    /// Consume both edges
    pub fn clear(&self) {
        self.released.clear();
        self.pressed.clear();
    }
}
