//! Cells shared between tasks
//!
//! Each cell has exactly one producing task. The alarm task consumes the
//! inputs and is the only writer of the blink gate.

use pirwatch_core::shared::{BlinkGate, ButtonEdges, MillisClock, SharedFlag};

/// Button press/release edges (producer: button task)
pub static BUTTON_EDGES: ButtonEdges = ButtonEdges::new();

/// PIR output level (producer: PIR task)
pub static PRESENCE: SharedFlag = SharedFlag::new();

/// Milliseconds since boot (producer: tick task)
pub static CLOCK: MillisClock = MillisClock::new();

/// Blink timer enable (producer: alarm actions, consumer: blink task)
pub static BLINK_GATE: BlinkGate = BlinkGate::new();
