//! Blink timer enable gate

use portable_atomic::{AtomicBool, Ordering};

use crate::traits::BlinkTimer;

/// Enable bit of the periodic blink timer
///
/// The alarm actions start and stop the gate through [`BlinkTimer`]; the
/// periodic task that toggles the LED only reads it.
#[derive(Debug, Default)]
pub struct BlinkGate {
    running: AtomicBool,
}

impl BlinkGate {
    /// Create a stopped gate
    pub const fn new() -> Self {
        Self {
            running: AtomicBool::new(false),
        }
    }

    /// Check if the timer is enabled
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

impl BlinkTimer for &BlinkGate {
    fn start(&mut self) {
        self.running.store(true, Ordering::Release);
    }

    fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
    }

    fn is_running(&self) -> bool {
        BlinkGate::is_running(self)
    }
}
