//! Board configuration
//!
//! Compile-time settings for the Raspberry Pi Pico wiring:
//!
//! | Function | Pin    | Level                          |
//! |----------|--------|--------------------------------|
//! | LED      | GPIO25 | onboard LED, active high       |
//! | Button   | GPIO14 | to GND, internal pull-up       |
//! | PIR      | GPIO15 | HC-SR501 OUT, internal pull-down |

use pirwatch_drivers::LedPolarity;

/// Status LED polarity
pub const LED_POLARITY: LedPolarity = LedPolarity::ActiveHigh;

/// Button reads low while pressed
pub const BUTTON_ACTIVE_LOW: bool = true;

/// PIR output is high while presence is sensed
pub const PIR_ACTIVE_HIGH: bool = true;

/// LED blink half-period in milliseconds
pub const BLINK_PERIOD_MS: u64 = 500;

/// Interval between alarm steps in milliseconds
pub const POLL_INTERVAL_MS: u64 = 10;

/// Clock tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 1;
