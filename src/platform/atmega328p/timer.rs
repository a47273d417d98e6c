//! ATmega328P Timer0 millisecond tick
//!
//! Configures Timer0 in CTC mode to fire `TIMER0_COMPA` once per
//! millisecond and binds the interrupt handler that advances the system
//! clock. The prescaler and compare threshold come pre-derived from
//! [`TimerRate`](crate::clock::rate::TimerRate); deriving it in a `const`
//! context is what enforces the clock-frequency range at build time.

use avr_device::atmega328p::TC0;

use crate::clock::rate::{Prescaler, TimerRate};
use crate::clock::SystemClock;

/// Initialize the millisecond tick.
///
/// Programs CTC mode, the derived clock-select and compare threshold,
/// enables the compare-match interrupt, then globally unmasks interrupts.
/// Call exactly once, before the first delay; interrupts are enabled
/// process-wide from here on.
pub fn init(tc0: TC0, rate: TimerRate) {
    // CTC mode: count up, signal on OCR0A match, reset to zero.
    tc0.tccr0a().write(|w| w.wgm0().ctc());
    tc0.tccr0b().write(|w| match rate.prescaler() {
        Prescaler::Direct => w.cs0().direct(),
        Prescaler::Div8 => w.cs0().prescale_8(),
        Prescaler::Div64 => w.cs0().prescale_64(),
        Prescaler::Div256 => w.cs0().prescale_256(),
        Prescaler::Div1024 => w.cs0().prescale_1024(),
    });
    tc0.ocr0a().write(|w| w.bits(rate.compare()));

    // Compare-match A interrupt enable, then the global flag.
    tc0.timsk0().write(|w| w.ocie0a().set_bit());
    unsafe { avr_device::interrupt::enable() };
}

#[avr_device::interrupt(atmega328p)]
fn TIMER0_COMPA() {
    // Increment only. No I/O, no pin driver calls, no logging: anything
    // more stretches handler latency and stalls the periodic signal.
    SystemClock::tick();
}
