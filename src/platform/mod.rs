//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the two peripherals the
//! firmware touches: the millisecond tick timer and the digital I/O ports.
//! All target-specific code is isolated to the platform implementations.

pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "atmega328p")]
pub mod atmega328p;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use traits::{ClockInterface, GpioInterface, PinDirection, PinLevel, Port};
