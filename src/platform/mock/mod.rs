//! Mock platform implementation for hardware-free testing

pub mod gpio;
pub mod timer;

pub use gpio::{MockGpio, PinEvent};
pub use timer::MockClock;
