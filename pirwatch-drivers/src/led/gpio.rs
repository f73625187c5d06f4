//! GPIO status LED
//!
//! Drives the LED through an `embedded-hal` output pin and delegates the
//! blink cadence to a [`BlinkTimer`]. The periodic timer interrupt (or
//! task) calls [`GpioLed::on_timer_elapsed`] to toggle the LED while the
//! timer runs.

use embedded_hal::digital::OutputPin;
use pirwatch_core::traits::{BlinkTimer, Led};

/// Electrical polarity of the LED output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedPolarity {
    /// LED lit when the pin is high
    ActiveHigh,
    /// LED lit when the pin is low (sinking driver)
    ActiveLow,
}

/// Status LED on a GPIO pin with a blink timer
pub struct GpioLed<P, T> {
    pin: P,
    timer: T,
    polarity: LedPolarity,
    /// Current logical state (true = lit)
    on: bool,
}

impl<P: OutputPin, T: BlinkTimer> GpioLed<P, T> {
    /// Create a new LED output
    ///
    /// The pin is not driven until [`Led::init`] runs.
    pub fn new(pin: P, timer: T, polarity: LedPolarity) -> Self {
        Self {
            pin,
            timer,
            polarity,
            on: false,
        }
    }

    /// Create an LED lit by driving the pin high
    pub fn new_active_high(pin: P, timer: T) -> Self {
        Self::new(pin, timer, LedPolarity::ActiveHigh)
    }

    /// Create an LED lit by driving the pin low
    pub fn new_active_low(pin: P, timer: T) -> Self {
        Self::new(pin, timer, LedPolarity::ActiveLow)
    }

    /// Timer period elapsed: toggle the LED if blinking is enabled
    pub fn on_timer_elapsed(&mut self) {
        if self.timer.is_running() {
            self.toggle();
        }
    }

    /// Check if the blink timer is running
    pub fn is_blinking(&self) -> bool {
        self.timer.is_running()
    }

    /// Get the configured polarity
    pub fn polarity(&self) -> LedPolarity {
        self.polarity
    }

    fn drive(&mut self, on: bool) {
        self.on = on;

        let high = match self.polarity {
            LedPolarity::ActiveHigh => on,
            LedPolarity::ActiveLow => !on,
        };

        // A failed write leaves `on` tracking the request; actions must stay total
        let _ = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }
}

impl<P: OutputPin, T: BlinkTimer> Led for GpioLed<P, T> {
    fn init(&mut self) {
        self.timer.stop();
        self.drive(false);
    }

    fn turn_on(&mut self) {
        self.drive(true);
    }

    fn turn_off(&mut self) {
        self.drive(false);
    }

    fn toggle(&mut self) {
        self.drive(!self.on);
    }

    fn status(&self) -> bool {
        self.on
    }

    fn start_blink_timer(&mut self) {
        self.timer.start();
    }

    fn stop_blink_timer(&mut self) {
        self.timer.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use pirwatch_core::shared::BlinkGate;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
        writes: u32,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                writes: 0,
            }
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_active_high_led() {
        let gate = BlinkGate::new();
        let mut led = GpioLed::new_active_high(MockPin::new(), &gate);
        led.init();

        // Initially off
        assert!(!led.status());
        assert!(!led.pin.high);

        led.turn_on();
        assert!(led.status());
        assert!(led.pin.high);

        led.turn_off();
        assert!(!led.status());
        assert!(!led.pin.high);
    }

    #[test]
    fn test_active_low_led() {
        let gate = BlinkGate::new();
        let mut led = GpioLed::new_active_low(MockPin::new(), &gate);
        assert_eq!(led.polarity(), LedPolarity::ActiveLow);
        led.init();

        // Off means pin high for active-low
        assert!(!led.status());
        assert!(led.pin.high);

        led.turn_on();
        assert!(led.status());
        assert!(!led.pin.high);
    }

    #[test]
    fn test_toggle() {
        let gate = BlinkGate::new();
        let mut led = GpioLed::new_active_high(MockPin::new(), &gate);
        led.init();

        led.toggle();
        assert!(led.status());
        led.toggle();
        assert!(!led.status());
        assert!(!led.pin.high);
    }

    #[test]
    fn test_init_stops_timer() {
        let gate = BlinkGate::new();
        let mut led = GpioLed::new_active_high(MockPin::new(), &gate);
        led.start_blink_timer();
        assert!(gate.is_running());

        led.init();
        assert!(!gate.is_running());
        assert!(!led.is_blinking());
    }

    #[test]
    fn test_timer_elapsed_only_toggles_while_blinking() {
        let gate = BlinkGate::new();
        let mut led = GpioLed::new_active_high(MockPin::new(), &gate);
        led.init();
        let writes = led.pin.writes;

        // Timer stopped: nothing happens
        led.on_timer_elapsed();
        assert!(!led.status());
        assert_eq!(led.pin.writes, writes);

        led.turn_on();
        led.start_blink_timer();
        assert!(led.is_blinking());

        led.on_timer_elapsed();
        assert!(!led.status());
        led.on_timer_elapsed();
        assert!(led.status());

        led.stop_blink_timer();
        led.turn_off();
        led.on_timer_elapsed();
        assert!(!led.status());
    }
}
