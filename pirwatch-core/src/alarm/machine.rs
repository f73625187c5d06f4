//! Alarm state machine definition
//!
//! Two states and two guarded transitions:
//!
//! | From       | Guard                    | To         | Action             |
//! |------------|--------------------------|------------|--------------------|
//! | `Disarmed` | `presence_detected`      | `Armed`    | `activate_alarm`   |
//! | `Armed`    | `deactivation_requested` | `Disarmed` | `deactivate_alarm` |

use crate::fsm::{Fsm, FsmError, Step, Transition};
use crate::traits::{Button, Clock, Led, PirSensor};

/// Alarm states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmState {
    /// Waiting for presence; LED off
    Disarmed,
    /// Presence seen; LED blinking until the button is clicked
    Armed,
}

impl AlarmState {
    /// Check if the alarm is armed
    pub fn is_armed(&self) -> bool {
        matches!(self, AlarmState::Armed)
    }
}

/// Data the alarm guards read and its actions mutate
pub struct AlarmContext<B, L, P, K> {
    button: B,
    led: L,
    pir: P,
    clock: K,
    /// True while armed
    alarm_status: bool,
    /// Clock reading at the most recent arming (ms since boot)
    last_time_alarm: u32,
}

impl<B, L, P, K> AlarmContext<B, L, P, K>
where
    B: Button + 'static,
    L: Led + 'static,
    P: PirSensor + 'static,
    K: Clock + 'static,
{
    const TRANSITIONS: &'static [Transition<AlarmState, Self>] = &[
        Transition::new(
            AlarmState::Disarmed,
            Self::presence_detected,
            AlarmState::Armed,
            Self::activate_alarm,
        ),
        Transition::new(
            AlarmState::Armed,
            Self::deactivation_requested,
            AlarmState::Disarmed,
            Self::deactivate_alarm,
        ),
    ];

    /// A new presence: the PIR is active and the alarm is not yet armed
    fn presence_detected(&self) -> bool {
        self.pir.status() && !self.alarm_status
    }

    /// A full button click (press then release) is pending
    fn deactivation_requested(&self) -> bool {
        self.button.clicked()
    }

    fn activate_alarm(&mut self) {
        self.led.turn_on();
        self.led.start_blink_timer();

        self.alarm_status = true;
        self.last_time_alarm = self.clock.now_ms();
    }

    fn deactivate_alarm(&mut self) {
        self.led.stop_blink_timer();
        self.led.turn_off();

        self.alarm_status = false;
        // One click disarms once
        self.button.clear_edges();
    }
}

/// PIR alarm built on the table-driven engine
///
/// Owns its collaborators for the lifetime of the process. Firmware passes
/// handles onto `'static` shared cells, so interrupt-side producers keep
/// writing the same state the guards read.
pub struct AlarmFsm<B: 'static, L: 'static, P: 'static, K: 'static> {
    fsm: Fsm<AlarmState, AlarmContext<B, L, P, K>>,
}

impl<B, L, P, K> AlarmFsm<B, L, P, K>
where
    B: Button + 'static,
    L: Led + 'static,
    P: PirSensor + 'static,
    K: Clock + 'static,
{
    /// Build the alarm and initialise each collaborator once
    ///
    /// Starts `Disarmed` with `alarm_status` false and `last_time_alarm` 0.
    pub fn new(mut button: B, mut led: L, mut pir: P, clock: K) -> Result<Self, FsmError> {
        button.init();
        led.init();
        pir.init();

        let context = AlarmContext {
            button,
            led,
            pir,
            clock,
            alarm_status: false,
            last_time_alarm: 0,
        };

        let fsm = Fsm::new(AlarmContext::<B, L, P, K>::TRANSITIONS, context)?;
        Ok(Self { fsm })
    }

    /// Run one interpreter pass
    pub fn step(&mut self) -> Step<AlarmState> {
        self.fsm.step()
    }

    /// Get the current state
    pub fn state(&self) -> AlarmState {
        self.fsm.state()
    }

    /// Check if the alarm is armed
    pub fn alarm_status(&self) -> bool {
        self.fsm.context().alarm_status
    }

    /// Get the time of the most recent arming (ms since boot)
    pub fn last_time_alarm(&self) -> u32 {
        self.fsm.context().last_time_alarm
    }

    /// Get the button
    pub fn button(&self) -> &B {
        &self.fsm.context().button
    }

    /// Get the LED
    pub fn led(&self) -> &L {
        &self.fsm.context().led
    }

    /// Get the PIR sensor
    pub fn pir(&self) -> &P {
        &self.fsm.context().pir
    }

    /// Get the clock
    pub fn clock(&self) -> &K {
        &self.fsm.context().clock
    }
}
