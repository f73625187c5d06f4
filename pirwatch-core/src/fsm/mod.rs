//! Generic finite state machine engine
//!
//! A transition table drives the machine: each step evaluates the guards
//! registered for the current state in table order and fires the first
//! one that holds.

pub mod engine;
pub mod error;

pub use engine::{Action, Fsm, Guard, Step, Transition};
pub use error::FsmError;
