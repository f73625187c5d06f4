//! Hardware collaborator traits
//!
//! These traits define the interface between the alarm state machine
//! and hardware-specific implementations.

pub mod button;
pub mod clock;
pub mod led;
pub mod sensor;

pub use button::Button;
pub use clock::Clock;
pub use led::{BlinkTimer, Led};
pub use sensor::PirSensor;
