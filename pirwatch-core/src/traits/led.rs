//! Status LED and blink timer traits

/// Periodic timer that drives the LED blink cadence
///
/// The period belongs to the timer implementation, not to the caller.
pub trait BlinkTimer {
    /// Start (or restart) the periodic timer
    fn start(&mut self);

    /// Stop the periodic timer
    fn stop(&mut self);

    /// Check if the timer is running
    fn is_running(&self) -> bool;
}

/// Trait for a status LED with a blink timer
pub trait Led {
    /// Prepare the LED for use (output configured, LED off, timer stopped)
    ///
    /// Called exactly once when the owning state machine is built.
    fn init(&mut self);

    /// Turn the LED on
    fn turn_on(&mut self);

    /// Turn the LED off
    fn turn_off(&mut self);

    /// Invert the LED state
    fn toggle(&mut self);

    /// Check if the LED is lit
    fn status(&self) -> bool;

    /// Start the periodic blink timer
    fn start_blink_timer(&mut self);

    /// Stop the periodic blink timer
    fn stop_blink_timer(&mut self);
}
