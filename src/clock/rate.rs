//! Timer rate derivation
//!
//! Computes the Timer0 prescaler selection and compare threshold that
//! produce a 1 kHz compare-match rate from the input clock frequency. The
//! derivation is a `const fn` so the firmware evaluates it in a `const`
//! context: an out-of-range clock frequency fails the build instead of
//! producing a running-but-wrong binary.

/// Hardware-imposed ceiling on the input clock frequency.
pub const MAX_CLOCK_HZ: u32 = 20_000_000;

/// Target compare-match rate: one tick per millisecond.
pub const TICK_HZ: u32 = 1_000;

/// Largest per-millisecond tick count the 8-bit compare register can hold.
const COMPARE_MAX: u32 = 255;

/// Timer0 prescaler selection
///
/// The divisor table of the Timer0 clock-select logic, ordered finest to
/// coarsest. Note the steps are not uniform: x8, x8, x4, x4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prescaler {
    /// Undivided input clock
    Direct,
    /// Input clock / 8
    Div8,
    /// Input clock / 64
    Div64,
    /// Input clock / 256
    Div256,
    /// Input clock / 1024
    Div1024,
}

impl Prescaler {
    /// All selections, finest divisor first.
    pub const ALL: [Prescaler; 5] = [
        Prescaler::Direct,
        Prescaler::Div8,
        Prescaler::Div64,
        Prescaler::Div256,
        Prescaler::Div1024,
    ];

    /// The clock divisor this selection applies.
    pub const fn divisor(self) -> u32 {
        match self {
            Prescaler::Direct => 1,
            Prescaler::Div8 => 8,
            Prescaler::Div64 => 64,
            Prescaler::Div256 => 256,
            Prescaler::Div1024 => 1024,
        }
    }
}

/// Derived timer configuration
///
/// Prescaler selection and compare threshold for a 1 kHz compare-match
/// rate. Immutable after derivation; consumed only by the timer peripheral
/// setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRate {
    prescaler: Prescaler,
    compare: u8,
}

impl TimerRate {
    /// Derive the prescaler and compare threshold for `clock_hz`.
    ///
    /// Starting from the finest prescaler, advances to the next coarser
    /// divisor while the per-millisecond tick count exceeds the compare
    /// register's range, then sets the threshold to `count - 1` (the timer
    /// counts up, signals on compare match, and resets). The finest divisor
    /// that fits is chosen for accuracy.
    ///
    /// # Panics
    ///
    /// Panics if `clock_hz` exceeds [`MAX_CLOCK_HZ`] or is below
    /// [`TICK_HZ`] (less than one timer tick per millisecond). Evaluated in
    /// a `const` context this is a build failure, which is where both
    /// violations are meant to be caught.
    pub const fn derive(clock_hz: u32) -> TimerRate {
        assert!(
            clock_hz <= MAX_CLOCK_HZ,
            "input clock frequency exceeds the 20 MHz timer ceiling"
        );
        assert!(
            clock_hz >= TICK_HZ,
            "input clock frequency below one timer tick per millisecond"
        );

        // The 20 MHz ceiling guarantees a fit no later than Div256
        // (20_000_000 / 1000 / 256 = 78), so the index stays in range.
        let mut i = 0;
        loop {
            let prescaler = Prescaler::ALL[i];
            let ticks = clock_hz / TICK_HZ / prescaler.divisor();
            if ticks <= COMPARE_MAX {
                return TimerRate {
                    prescaler,
                    compare: (ticks - 1) as u8,
                };
            }
            i += 1;
        }
    }

    /// The derived prescaler selection.
    pub const fn prescaler(self) -> Prescaler {
        self.prescaler
    }

    /// The derived compare threshold (loaded into OCR0A).
    pub const fn compare(self) -> u8 {
        self.compare
    }

    /// Timer counts per millisecond at the derived prescaler.
    pub const fn ticks_per_ms(self) -> u32 {
        self.compare as u32 + 1
    }
}
