//! ATmega328P GPIO implementation
//!
//! Port/pin-addressed read-modify-write of the DDRx and PORTx registers.
//! Stateless beyond ownership of the three port peripherals; every
//! operation is an unconditional single-bit update.

use avr_device::atmega328p::{PORTB, PORTC, PORTD};

use crate::platform::traits::{GpioInterface, PinDirection, PinLevel, Port};

/// Pins per port.
const PORT_WIDTH: u8 = 8;

/// ATmega328P I/O ports
///
/// Owns the PORTB/PORTC/PORTD peripherals. Unknown port selectors and pin
/// numbers beyond the port width are ignored, matching the permissive
/// no-op contract of [`GpioInterface`].
pub struct AvrGpio {
    portb: PORTB,
    portc: PORTC,
    portd: PORTD,
}

impl AvrGpio {
    /// Take ownership of the three I/O port peripherals.
    pub fn new(portb: PORTB, portc: PORTC, portd: PORTD) -> AvrGpio {
        AvrGpio {
            portb,
            portc,
            portd,
        }
    }
}

/// Set or clear one bit in a register value.
fn apply(bits: u8, mask: u8, set: bool) -> u8 {
    if set {
        bits | mask
    } else {
        bits & !mask
    }
}

impl GpioInterface for AvrGpio {
    fn set_direction(&mut self, port: u8, pin: u8, direction: PinDirection) {
        if pin >= PORT_WIDTH {
            return;
        }
        let mask = 1u8 << pin;
        let out = direction == PinDirection::Output;
        match Port::from_index(port) {
            Some(Port::B) => self
                .portb
                .ddrb()
                .modify(|r, w| unsafe { w.bits(apply(r.bits(), mask, out)) }),
            Some(Port::C) => self
                .portc
                .ddrc()
                .modify(|r, w| unsafe { w.bits(apply(r.bits(), mask, out)) }),
            Some(Port::D) => self
                .portd
                .ddrd()
                .modify(|r, w| unsafe { w.bits(apply(r.bits(), mask, out)) }),
            None => {}
        }
    }

    fn set_level(&mut self, port: u8, pin: u8, level: PinLevel) {
        if pin >= PORT_WIDTH {
            return;
        }
        let mask = 1u8 << pin;
        let high = level == PinLevel::High;
        match Port::from_index(port) {
            Some(Port::B) => self
                .portb
                .portb()
                .modify(|r, w| unsafe { w.bits(apply(r.bits(), mask, high)) }),
            Some(Port::C) => self
                .portc
                .portc()
                .modify(|r, w| unsafe { w.bits(apply(r.bits(), mask, high)) }),
            Some(Port::D) => self
                .portd
                .portd()
                .modify(|r, w| unsafe { w.bits(apply(r.bits(), mask, high)) }),
            None => {}
        }
    }
}
