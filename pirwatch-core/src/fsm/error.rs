//! Construction errors for the state machine engine

use core::fmt;

/// Errors detected while building or forcing a state machine
///
/// All of these are construction-time faults. Once a machine is built,
/// stepping it cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FsmError {
    /// Transition table has no records
    EmptyTable,
    /// State does not appear as origin or destination in the table
    UnknownState,
}

impl fmt::Display for FsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsmError::EmptyTable => f.write_str("transition table is empty"),
            FsmError::UnknownState => f.write_str("state is not part of the transition table"),
        }
    }
}
