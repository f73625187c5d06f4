//! Button edge task
//!
//! Waits on GPIO edges of the disarm button and records presses and
//! releases into the shared edge flags.

use defmt::*;
use embassy_rp::gpio::Input;

use crate::channels::BUTTON_EDGES;
use crate::config::BUTTON_ACTIVE_LOW;

/// Button input configuration
pub struct ButtonConfig {
    /// Pin reads low while the button is held
    pub active_low: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            active_low: BUTTON_ACTIVE_LOW,
        }
    }
}

/// Button task - translates pin edges into press/release flags
#[embassy_executor::task]
pub async fn button_task(mut pin: Input<'static>, config: ButtonConfig) {
    info!("Button task started");

    loop {
        pin.wait_for_any_edge().await;

        let held = if config.active_low {
            pin.is_low()
        } else {
            pin.is_high()
        };

        if held {
            BUTTON_EDGES.record_press();
            debug!("Button pressed");
        } else {
            BUTTON_EDGES.record_release();
            debug!("Button released");
        }
    }
}
