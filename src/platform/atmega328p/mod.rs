//! ATmega328P platform implementation
//!
//! Register-level implementations over the `avr-device` PAC: the I/O port
//! pin driver and the Timer0 millisecond tick source.

pub mod gpio;
pub mod timer;

pub use gpio::AvrGpio;
