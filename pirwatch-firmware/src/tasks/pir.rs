//! PIR sensor task
//!
//! Latches the PIR output level into the shared presence flag on every
//! edge.

use defmt::*;
use embassy_rp::gpio::Input;

use crate::channels::PRESENCE;
use crate::config::PIR_ACTIVE_HIGH;

/// PIR input configuration
pub struct PirConfig {
    /// Output is high while presence is sensed
    pub active_high: bool,
}

impl Default for PirConfig {
    fn default() -> Self {
        Self {
            active_high: PIR_ACTIVE_HIGH,
        }
    }
}

/// PIR task - mirrors the sensor output into the presence flag
#[embassy_executor::task]
pub async fn pir_task(mut pin: Input<'static>, config: PirConfig) {
    info!("PIR task started");

    let read = |pin: &Input<'static>| {
        if config.active_high {
            pin.is_high()
        } else {
            pin.is_low()
        }
    };

    // Sensor may already be active at boot
    PRESENCE.write(read(&pin));

    loop {
        pin.wait_for_any_edge().await;

        let present = read(&pin);
        PRESENCE.write(present);

        if present {
            info!("Presence detected");
        } else {
            debug!("Presence cleared");
        }
    }
}
