//! LED blink timer task
//!
//! Stands in for the periodic timer interrupt: every period it toggles
//! the status LED if the alarm has enabled blinking.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::config::BLINK_PERIOD_MS;
use crate::led::SharedLed;

/// Blink timer configuration
pub struct BlinkConfig {
    /// Time between LED toggles in milliseconds
    pub period_ms: u64,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            period_ms: BLINK_PERIOD_MS,
        }
    }
}

/// Blink task - toggles the LED while the blink gate is open
#[embassy_executor::task]
pub async fn blink_task(led: SharedLed, config: BlinkConfig) {
    info!("Blink task started ({} ms period)", config.period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(config.period_ms));

    loop {
        ticker.next().await;
        led.on_timer_elapsed();
    }
}
