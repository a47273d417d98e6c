#![no_std]
#![no_main]

//! Blink application for the ATmega328P
//!
//! Configures the on-board LED pin (port B, pin 5), starts the Timer0
//! millisecond clock, emits the default blink sequence, then parks forever.

use panic_halt as _;

use mega_blink::blink::{self, BlinkConfig};
use mega_blink::clock::{SystemClock, TimerRate};
use mega_blink::platform::atmega328p::{timer, AvrGpio};

/// Nominal input clock frequency of the board (Hz).
const CLOCK_HZ: u32 = 16_000_000;

// Derived in a const context: a clock outside the supported range fails
// the build here, never at runtime.
const RATE: TimerRate = TimerRate::derive(CLOCK_HZ);

#[avr_device::entry]
fn main() -> ! {
    // Cannot fail on the first call after reset.
    let dp = avr_device::atmega328p::Peripherals::take().unwrap();

    let mut gpio = AvrGpio::new(dp.PORTB, dp.PORTC, dp.PORTD);
    timer::init(dp.TC0, RATE);
    let clock = SystemClock::new();

    blink::run(&mut gpio, &clock, &BlinkConfig::default());

    // Sequence done; the device idles in a literal spin until reset.
    loop {}
}
