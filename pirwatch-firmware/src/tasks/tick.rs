//! Tick task for the millisecond clock
//!
//! Advances the shared clock used to timestamp alarm activations.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::CLOCK;
use crate::config::TICK_INTERVAL_MS;

/// Tick task - advances the shared millisecond clock
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(TICK_INTERVAL_MS)));

    loop {
        ticker.next().await;
        CLOCK.advance(TICK_INTERVAL_MS);
    }
}
