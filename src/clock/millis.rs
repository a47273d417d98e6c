//! Elapsed-millisecond counter
//!
//! One `u32` counter, written only by the timer interrupt handler and read
//! only from foreground context. The counter is wider than the AVR's 8-bit
//! atomic read width, so every read goes through a critical section: the
//! `critical-section` implementation disables interrupts for the duration
//! of the read and restores the prior mask state on exit (the avr-device
//! implementation on target, the std implementation in host tests).
//!
//! The raw static never leaves this module; all access goes through
//! [`SystemClock`].

use core::cell::Cell;

use critical_section::Mutex;

use crate::platform::traits::ClockInterface;

/// Milliseconds since clock initialization. Zeroed at process start, lives
/// for the process lifetime.
static MILLIS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Handle to the system millisecond clock
///
/// The counter itself is process-wide; this type is the synchronized
/// front door. Construct one after the timer peripheral has been
/// initialized (`platform::atmega328p::timer::init` on hardware).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a clock handle.
    pub const fn new() -> SystemClock {
        SystemClock
    }

    /// Advance the counter by exactly one millisecond.
    ///
    /// Called once per compare-match from the timer interrupt handler,
    /// which does no other work. The counter wraps silently at `u32::MAX`;
    /// readers use wrapping arithmetic, so no rollover handling is needed
    /// here.
    pub(crate) fn tick() {
        critical_section::with(|cs| {
            let ms = MILLIS.borrow(cs);
            ms.set(ms.get().wrapping_add(1));
        });
    }
}

impl ClockInterface for SystemClock {
    fn now_ms(&self) -> u32 {
        critical_section::with(|cs| MILLIS.borrow(cs).get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The counter is process-global, so everything that touches it lives in
    // one test; cargo runs separate #[test] fns on parallel threads.
    #[test]
    fn test_tick_increments_and_reads_are_monotonic() {
        let clock = SystemClock::new();

        let start = clock.now_ms();
        SystemClock::tick();
        assert_eq!(clock.now_ms(), start.wrapping_add(1));

        // Repeated reads without a tick observe the same committed value.
        assert_eq!(clock.now_ms(), clock.now_ms());

        let mut prev = clock.now_ms();
        for _ in 0..1000 {
            SystemClock::tick();
            let now = clock.now_ms();
            assert_eq!(now, prev.wrapping_add(1));
            prev = now;
        }
    }
}
