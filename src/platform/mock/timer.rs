//! Simulated millisecond clock for testing
//!
//! An injectable counter feed standing in for the interrupt-driven counter.
//! Each read advances the counter by a configurable step, simulating the
//! ticks that would arrive while the foreground polls, so busy-wait delays
//! terminate in tests. Absolute values can be injected to exercise
//! wraparound behavior.

use core::cell::Cell;

use crate::platform::traits::ClockInterface;

/// Simulated millisecond clock
///
/// Starts at zero with a step of one: every `now_ms` read observes the
/// previous value and advances time by one millisecond. Set the step to
/// zero to freeze time and drive it manually with [`MockClock::advance`].
#[derive(Debug)]
pub struct MockClock {
    now_ms: Cell<u32>,
    step_ms: Cell<u32>,
}

impl MockClock {
    /// Create a clock at t=0 advancing one millisecond per read.
    pub fn new() -> MockClock {
        MockClock {
            now_ms: Cell::new(0),
            step_ms: Cell::new(1),
        }
    }

    /// Inject an absolute counter value (for wraparound scenarios).
    pub fn set_ms(&self, ms: u32) {
        self.now_ms.set(ms);
    }

    /// Milliseconds simulated time advances per `now_ms` read.
    pub fn set_step(&self, step_ms: u32) {
        self.step_ms.set(step_ms);
    }

    /// Advance simulated time without a read.
    pub fn advance(&self, ms: u32) {
        self.now_ms.set(self.now_ms.get().wrapping_add(ms));
    }

    /// Peek at the counter without advancing it.
    pub fn peek_ms(&self) -> u32 {
        self.now_ms.get()
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockInterface for MockClock {
    fn now_ms(&self) -> u32 {
        let now = self.now_ms.get();
        self.now_ms.set(now.wrapping_add(self.step_ms.get()));
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_and_advances_per_read() {
        let clock = MockClock::new();
        assert_eq!(clock.now_ms(), 0);
        assert_eq!(clock.now_ms(), 1);
        assert_eq!(clock.now_ms(), 2);
    }

    #[test]
    fn test_frozen_clock_reads_same_value() {
        let clock = MockClock::new();
        clock.set_step(0);
        assert_eq!(clock.now_ms(), 0);
        assert_eq!(clock.now_ms(), 0);
        clock.advance(7);
        assert_eq!(clock.now_ms(), 7);
    }

    #[test]
    fn test_reads_are_monotonic_up_to_wraparound() {
        let clock = MockClock::new();
        let mut prev = clock.now_ms();
        for _ in 0..10_000 {
            let now = clock.now_ms();
            assert_eq!(now.wrapping_sub(prev), 1);
            prev = now;
        }
    }

    #[test]
    fn test_delay_zero_returns_immediately() {
        let clock = MockClock::new();
        clock.delay_ms(0);
        // The t0 capture and one loop check; no spinning.
        assert!(clock.peek_ms() <= 2);
    }

    #[test]
    fn test_delay_waits_at_least_duration() {
        let clock = MockClock::new();
        clock.delay_ms(250);
        let elapsed = clock.peek_ms();
        assert!(elapsed >= 250, "returned after {elapsed} ms");
        // One tick per poll: no gross overshoot either.
        assert!(elapsed <= 252, "kept spinning until {elapsed} ms");
    }

    #[test]
    fn test_delay_terminates_across_wraparound() {
        let clock = MockClock::new();
        clock.set_ms(u32::MAX - 5);
        clock.delay_ms(100);
        // Wrapped past zero and still measured a full 100 ms.
        let end = clock.peek_ms();
        assert!(end >= 95 && end <= 97, "ended at {end}");
    }

    #[test]
    fn test_delay_with_coarse_ticks_overshoots_but_returns() {
        let clock = MockClock::new();
        clock.set_step(7);
        clock.delay_ms(100);
        assert!(clock.peek_ms() >= 100);
    }
}
