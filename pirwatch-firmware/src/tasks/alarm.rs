//! Alarm stepping task
//!
//! Polls the alarm state machine at a fixed interval and logs every
//! transition.

use defmt::*;
use embassy_time::{Duration, Ticker};

use pirwatch_core::fsm::Step;
use pirwatch_core::shared::MillisClock;
use pirwatch_core::traits::Clock;
use pirwatch_core::{AlarmFsm, AlarmState};
use pirwatch_drivers::{EdgeButton, LatchedPir};

use crate::config::POLL_INTERVAL_MS;
use crate::led::SharedLed;

/// Alarm state machine as wired on the board
pub type Alarm = AlarmFsm<EdgeButton<'static>, SharedLed, LatchedPir<'static>, &'static MillisClock>;

/// Alarm task configuration
pub struct AlarmTaskConfig {
    /// Interval between steps in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for AlarmTaskConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: POLL_INTERVAL_MS,
        }
    }
}

/// Alarm task - runs one interpreter step per poll interval
#[embassy_executor::task]
pub async fn alarm_task(mut alarm: Alarm, config: AlarmTaskConfig) {
    info!("Alarm task started in {:?}", alarm.state());

    let mut ticker = Ticker::every(Duration::from_millis(config.poll_interval_ms));

    loop {
        if let Step::Fired { from, to } = alarm.step() {
            match to {
                AlarmState::Armed => {
                    warn!("Alarm armed at {} ms", alarm.last_time_alarm());
                }
                AlarmState::Disarmed => {
                    info!("Alarm disarmed at {} ms", alarm.clock().now_ms());
                }
            }
            debug!("Transition {:?} -> {:?}", from, to);
        }

        ticker.next().await;
    }
}
