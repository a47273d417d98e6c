//! GPIO interface trait
//!
//! This module defines the port/pin-addressed digital I/O interface that
//! platform implementations must provide.

/// I/O port selector
///
/// The three general-purpose ports of the ATmega328P. Application code
/// addresses ports by raw index (the register-selector form the hardware
/// exposes); `from_index` is the single point where an index becomes a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    /// Port B (DDRB/PORTB)
    B,
    /// Port C (DDRC/PORTC)
    C,
    /// Port D (DDRD/PORTD)
    D,
}

impl Port {
    /// Resolve a raw port selector.
    ///
    /// Returns `None` for selectors outside the port map. Callers treat
    /// `None` as a no-op rather than an error; see [`GpioInterface`].
    pub fn from_index(index: u8) -> Option<Port> {
        match index {
            0 => Some(Port::B),
            1 => Some(Port::C),
            2 => Some(Port::D),
            _ => None,
        }
    }

    /// The raw selector for this port.
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinDirection {
    /// Input (high impedance)
    Input,
    /// Output (push-pull)
    Output,
}

/// Pin logic level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    /// Logic low
    Low,
    /// Logic high
    High,
}

/// Digital I/O interface
///
/// Platform implementations must provide this interface for pin control.
/// Both operations are unconditional, idempotent read-modify-writes of a
/// single bit in the addressed direction or level register.
///
/// An unknown port selector is silently ignored on both operations. This is
/// a deliberate permissive default, not an error path: nothing changes and
/// nothing is reported.
///
/// # Safety Invariants
///
/// - Only one owner per GPIO instance
/// - No access from interrupt context
pub trait GpioInterface {
    /// Set the direction of one pin on the addressed port.
    fn set_direction(&mut self, port: u8, pin: u8, direction: PinDirection);

    /// Set the output level of one pin on the addressed port.
    ///
    /// Only meaningful for pins configured as outputs; the write itself is
    /// unconditional.
    fn set_level(&mut self, port: u8, pin: u8, level: PinLevel);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_from_index() {
        assert_eq!(Port::from_index(0), Some(Port::B));
        assert_eq!(Port::from_index(1), Some(Port::C));
        assert_eq!(Port::from_index(2), Some(Port::D));
        assert_eq!(Port::from_index(3), None);
        assert_eq!(Port::from_index(255), None);
    }

    #[test]
    fn test_port_index_round_trip() {
        for port in [Port::B, Port::C, Port::D] {
            assert_eq!(Port::from_index(port.index()), Some(port));
        }
    }
}
