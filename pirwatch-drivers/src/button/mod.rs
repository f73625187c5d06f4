//! Push-button implementations

pub mod edge;

pub use edge::EdgeButton;
