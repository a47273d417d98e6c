//! Simulated GPIO for testing
//!
//! Tracks direction and level per (port, pin) and records every level
//! write in an event log, so tests can assert on whole pulse trains rather
//! than just the final pin state.

use heapless::Vec;

use crate::platform::traits::{GpioInterface, PinDirection, PinLevel, Port};

/// Number of ports in the port map (B, C, D).
const PORT_COUNT: usize = 3;

/// Pins per port.
const PORT_WIDTH: u8 = 8;

/// Event log capacity.
const MAX_EVENTS: usize = 64;

/// One recorded `set_level` call on a valid (port, pin).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinEvent {
    pub port: Port,
    pub pin: u8,
    pub level: PinLevel,
}

/// Simulated GPIO ports with state tracking
///
/// All pins start as inputs at level low, mirroring the hardware reset
/// state. Writes through an unknown port selector or a pin index outside
/// the port width change nothing and record nothing.
#[derive(Debug)]
pub struct MockGpio {
    directions: [[PinDirection; PORT_WIDTH as usize]; PORT_COUNT],
    levels: [[PinLevel; PORT_WIDTH as usize]; PORT_COUNT],
    events: Vec<PinEvent, MAX_EVENTS>,
}

impl MockGpio {
    /// Create mock ports in their reset state.
    pub fn new() -> MockGpio {
        MockGpio {
            directions: [[PinDirection::Input; PORT_WIDTH as usize]; PORT_COUNT],
            levels: [[PinLevel::Low; PORT_WIDTH as usize]; PORT_COUNT],
            events: Vec::new(),
        }
    }

    /// Current direction of a pin, `None` for an invalid selector.
    pub fn direction(&self, port: u8, pin: u8) -> Option<PinDirection> {
        let port = Port::from_index(port)?;
        if pin >= PORT_WIDTH {
            return None;
        }
        Some(self.directions[port.index() as usize][pin as usize])
    }

    /// Current level of a pin, `None` for an invalid selector.
    pub fn level(&self, port: u8, pin: u8) -> Option<PinLevel> {
        let port = Port::from_index(port)?;
        if pin >= PORT_WIDTH {
            return None;
        }
        Some(self.levels[port.index() as usize][pin as usize])
    }

    /// All recorded level writes, oldest first.
    pub fn events(&self) -> &[PinEvent] {
        &self.events
    }

    /// Drop the recorded events, keeping pin state.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl Default for MockGpio {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioInterface for MockGpio {
    fn set_direction(&mut self, port: u8, pin: u8, direction: PinDirection) {
        if let Some(port) = Port::from_index(port) {
            if pin < PORT_WIDTH {
                self.directions[port.index() as usize][pin as usize] = direction;
            }
        }
    }

    fn set_level(&mut self, port: u8, pin: u8, level: PinLevel) {
        if let Some(port) = Port::from_index(port) {
            if pin < PORT_WIDTH {
                self.levels[port.index() as usize][pin as usize] = level;
                // Log saturates at capacity; state stays correct regardless.
                let _ = self.events.push(PinEvent { port, pin, level });
            }
        }
    }
}
