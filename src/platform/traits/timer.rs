//! Millisecond clock interface trait
//!
//! This module defines the clock interface that platform implementations
//! must provide: a synchronized millisecond read plus a blocking delay
//! built on it.

/// Millisecond clock interface
///
/// `now_ms` must return a torn-free snapshot of the elapsed-millisecond
/// counter: the value observed was either fully committed by the tick
/// handler or not yet incremented. Implementations over a counter wider
/// than the hardware's atomic read width must bracket the read in a
/// critical section.
///
/// `now_ms` and `delay_ms` are foreground-context operations only. The
/// tick handler runs at elevated priority and must never call into this
/// interface; in particular, calling `delay_ms` from the handler would
/// spin forever.
pub trait ClockInterface {
    /// Milliseconds elapsed since clock initialization.
    ///
    /// Non-suspending, O(1), safe to call from normal context only.
    fn now_ms(&self) -> u32;

    /// Busy-wait until at least `duration` milliseconds have elapsed.
    ///
    /// Spins re-reading `now_ms`; fully occupies the calling context, is
    /// not cancellable, and has no timeout escape. The wrapping
    /// subtraction keeps the comparison correct across a counter rollover,
    /// so a wrap during the wait cannot produce a false-early return.
    /// `delay_ms(0)` returns immediately.
    fn delay_ms(&self, duration: u32) {
        let t0 = self.now_ms();
        while self.now_ms().wrapping_sub(t0) < duration {}
    }
}
