//! Millisecond clock
//!
//! The core of the firmware: derivation of the hardware timer rate from the
//! input clock frequency (`rate`) and the interrupt-driven elapsed-time
//! counter with its synchronized accessor (`millis`).

pub mod millis;
pub mod rate;

// Re-export commonly used types
pub use millis::SystemClock;
pub use rate::{Prescaler, TimerRate, MAX_CLOCK_HZ, TICK_HZ};
