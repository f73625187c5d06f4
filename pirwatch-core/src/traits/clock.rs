//! Monotonic millisecond clock

/// Milliseconds since boot
///
/// Used for timestamping only. The counter wraps after roughly 49 days.
pub trait Clock {
    /// Get the current time in milliseconds since boot
    fn now_ms(&self) -> u32;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
