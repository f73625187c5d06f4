//! Tick-driven millisecond clock

use portable_atomic::{AtomicU32, Ordering};

use crate::traits::Clock;

/// Millisecond counter advanced by a periodic tick source
#[derive(Debug, Default)]
pub struct MillisClock {
    millis: AtomicU32,
}

impl MillisClock {
    /// Create a clock reading zero
    pub const fn new() -> Self {
        Self {
            millis: AtomicU32::new(0),
        }
    }

    /// Advance by one millisecond (called from the tick source)
    pub fn tick(&self) {
        self.advance(1);
    }

    /// Advance by `ms` milliseconds, wrapping on overflow
    pub fn advance(&self, ms: u32) {
        self.millis.fetch_add(ms, Ordering::Relaxed);
    }

    /// Overwrite the counter
    pub fn set(&self, ms: u32) {
        self.millis.store(ms, Ordering::Relaxed);
    }
}

impl Clock for MillisClock {
    fn now_ms(&self) -> u32 {
        self.millis.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick() {
        let clock = MillisClock::new();
        assert_eq!(clock.now_ms(), 0);

        clock.tick();
        clock.tick();
        assert_eq!(clock.now_ms(), 2);

        clock.advance(98);
        assert_eq!(clock.now_ms(), 100);
    }

    #[test]
    fn test_wraps() {
        let clock = MillisClock::new();
        clock.set(u32::MAX);
        clock.tick();
        assert_eq!(clock.now_ms(), 0);
    }

    #[test]
    fn test_clock_by_reference() {
        let clock = MillisClock::new();
        clock.set(42);

        fn read<C: Clock>(c: C) -> u32 {
            c.now_ms()
        }

        assert_eq!(read(&clock), 42);
    }
}
