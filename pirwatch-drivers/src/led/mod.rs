//! Status LED implementations

pub mod gpio;

pub use gpio::{GpioLed, LedPolarity};
