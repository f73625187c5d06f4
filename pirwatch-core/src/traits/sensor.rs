//! Presence sensor trait

/// Trait for passive-infrared presence sensors
pub trait PirSensor {
    /// Prepare the sensor for use
    ///
    /// Called exactly once when the owning state machine is built.
    fn init(&mut self);

    /// Check if presence is currently sensed
    ///
    /// Implementations that cannot read the hardware must return `false`.
    fn status(&self) -> bool;
}
