//! Latched PIR sensor
//!
//! The PIR output interrupt writes the line level into a shared flag;
//! the alarm reads it here without touching the GPIO.

use pirwatch_core::shared::SharedFlag;
use pirwatch_core::traits::PirSensor;

/// PIR sensor read through an interrupt-latched presence line
pub struct LatchedPir<'a> {
    line: &'a SharedFlag,
}

impl<'a> LatchedPir<'a> {
    /// Create a sensor over the given presence line
    pub fn new(line: &'a SharedFlag) -> Self {
        Self { line }
    }
}

impl PirSensor for LatchedPir<'_> {
    fn init(&mut self) {
        // Level is re-latched on the next edge
        self.line.clear();
    }

    fn status(&self) -> bool {
        self.line.is_set()
    }
}
