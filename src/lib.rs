#![cfg_attr(not(test), no_std)]

//! mega_blink - Timer-driven LED blink firmware for the ATmega328P
//!
//! This library provides the platform abstraction, the Timer0-based
//! millisecond clock, and the blink sequencing logic. The flashable
//! application lives in `crates/firmware`.

// Platform abstraction layer (hardware and mock implementations)
pub mod platform;

// Millisecond clock: rate derivation and the interrupt-driven counter
pub mod clock;

// Pulse sequencing driven through the platform traits
pub mod blink;

// Logging macros (host-test println, no-op on target)
pub mod logging;
