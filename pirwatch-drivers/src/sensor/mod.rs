//! Presence sensor implementations

pub mod pir;

pub use pir::LatchedPir;
