//! Board-agnostic core logic for the PIR alarm firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Table-driven finite state machine engine
//! - Alarm state machine (arm on presence, disarm on button click)
//! - Collaborator traits (button, LED, PIR sensor, clock, blink timer)
//! - Interrupt-shared cells (edge flags, millisecond clock, blink gate)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod alarm;
pub mod fsm;
pub mod shared;
pub mod traits;

pub use alarm::{AlarmFsm, AlarmState};
pub use fsm::{Fsm, FsmError, Step, Transition};
