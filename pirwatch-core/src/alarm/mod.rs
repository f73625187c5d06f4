//! Alarm state machine
//!
//! Arms on a new presence reading from the PIR sensor and disarms on a
//! completed button click. The LED blinks while armed.

pub mod machine;

pub use machine::{AlarmContext, AlarmFsm, AlarmState};
