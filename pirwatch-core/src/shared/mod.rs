//! Cells shared between interrupt and thread context
//!
//! Each cell has a single producer and a single consumer. Updates are
//! single atomic operations, so no locks are needed.

pub mod blink;
pub mod clock;
pub mod flag;

pub use blink::BlinkGate;
pub use clock::MillisClock;
pub use flag::{ButtonEdges, SharedFlag};
