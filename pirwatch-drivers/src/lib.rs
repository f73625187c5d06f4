//! Hardware collaborator implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in pirwatch-core:
//!
//! - Status LED on a GPIO output with a gated blink timer
//! - Push-button backed by interrupt-set edge flags
//! - PIR sensor backed by an interrupt-latched presence line

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod led;
pub mod sensor;

pub use button::EdgeButton;
pub use led::{GpioLed, LedPolarity};
pub use sensor::LatchedPir;
