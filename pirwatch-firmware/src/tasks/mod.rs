//! Embassy async tasks
//!
//! Input tasks latch hardware edges into the shared cells; the alarm task
//! steps the state machine at a fixed interval.

pub mod alarm;
pub mod blink;
pub mod button;
pub mod pir;
pub mod tick;

pub use alarm::{alarm_task, Alarm, AlarmTaskConfig};
pub use blink::{blink_task, BlinkConfig};
pub use button::{button_task, ButtonConfig};
pub use pir::{pir_task, PirConfig};
pub use tick::tick_task;
