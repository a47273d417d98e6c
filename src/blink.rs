//! Blink sequencing
//!
//! Drives a square-wave pulse train on one (port, pin) through the platform
//! traits: high for half the period, low for half the period, repeated a
//! configured number of times. The firmware binary parks in an idle loop
//! once the sequence returns.

use crate::platform::traits::{ClockInterface, GpioInterface, PinDirection, PinLevel, Port};
use crate::{log_debug, log_info};

/// Blink parameters
///
/// The reference values (port B pin 5, 1000 ms period, 5 repetitions) are
/// application defaults, not protocol requirements; `Default` carries them
/// and callers may override freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkConfig {
    /// Raw port selector (resolved through `Port::from_index`)
    pub port: u8,
    /// Pin number within the port
    pub pin: u8,
    /// Full pulse period in milliseconds (half high, half low)
    pub period_ms: u32,
    /// Number of pulses before the sequence ends
    pub repetitions: u8,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        BlinkConfig {
            port: Port::B.index(),
            pin: 5,
            period_ms: 1000,
            repetitions: 5,
        }
    }
}

/// Emit one full pulse: high for `period_ms / 2`, low for `period_ms / 2`.
pub fn pulse<G, C>(gpio: &mut G, clock: &C, config: &BlinkConfig)
where
    G: GpioInterface,
    C: ClockInterface,
{
    gpio.set_level(config.port, config.pin, PinLevel::High);
    clock.delay_ms(config.period_ms / 2);

    gpio.set_level(config.port, config.pin, PinLevel::Low);
    clock.delay_ms(config.period_ms / 2);
}

/// Run the configured blink sequence to completion.
///
/// Sets the pin direction once, then emits `repetitions` pulses. Returns
/// with the pin low; all further output holds its last state.
pub fn run<G, C>(gpio: &mut G, clock: &C, config: &BlinkConfig)
where
    G: GpioInterface,
    C: ClockInterface,
{
    gpio.set_direction(config.port, config.pin, PinDirection::Output);
    log_info!(
        "blink: {} pulses of {} ms on port {} pin {}",
        config.repetitions,
        config.period_ms,
        config.port,
        config.pin
    );

    for i in 0..config.repetitions {
        log_debug!("blink: pulse {}", i + 1);
        pulse(gpio, clock, config);
    }

    log_info!("blink: sequence complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockClock, MockGpio};

    #[test]
    fn test_pulse_emits_high_then_low() {
        let mut gpio = MockGpio::new();
        let clock = MockClock::new();
        let config = BlinkConfig::default();

        pulse(&mut gpio, &clock, &config);

        let events = gpio.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].level, PinLevel::High);
        assert_eq!(events[1].level, PinLevel::Low);
        assert_eq!(gpio.level(config.port, config.pin), Some(PinLevel::Low));

        // Two half-period delays at one simulated ms per poll.
        let elapsed = clock.peek_ms();
        assert!(elapsed >= 1000 && elapsed <= 1010, "elapsed {elapsed}");
    }

    #[test]
    fn test_run_sets_direction_and_emits_all_pulses() {
        let mut gpio = MockGpio::new();
        let clock = MockClock::new();
        let config = BlinkConfig::default();

        run(&mut gpio, &clock, &config);

        assert_eq!(
            gpio.direction(config.port, config.pin),
            Some(PinDirection::Output)
        );

        // 5 pulses: 5 high-phases and 5 low-phases, strictly alternating,
        // and nothing after the last low.
        let events = gpio.events();
        assert_eq!(events.len(), 10);
        for (i, event) in events.iter().enumerate() {
            let expected = if i % 2 == 0 {
                PinLevel::High
            } else {
                PinLevel::Low
            };
            assert_eq!(event.level, expected, "event {i}");
            assert_eq!(event.port, Port::B);
            assert_eq!(event.pin, config.pin);
        }

        let elapsed = clock.peek_ms();
        assert!(elapsed >= 5000 && elapsed <= 5050, "elapsed {elapsed}");
    }

    #[test]
    fn test_run_with_zero_repetitions_only_configures_the_pin() {
        let mut gpio = MockGpio::new();
        let clock = MockClock::new();
        let config = BlinkConfig {
            repetitions: 0,
            ..BlinkConfig::default()
        };

        run(&mut gpio, &clock, &config);

        assert_eq!(
            gpio.direction(config.port, config.pin),
            Some(PinDirection::Output)
        );
        assert!(gpio.events().is_empty());
        assert!(clock.peek_ms() <= 1);
    }

    /// Records each level write with the simulated time it happened at.
    struct TimedGpio<'a> {
        clock: &'a MockClock,
        events: Vec<(PinLevel, u32)>,
    }

    impl GpioInterface for TimedGpio<'_> {
        fn set_direction(&mut self, _port: u8, _pin: u8, _direction: PinDirection) {}

        fn set_level(&mut self, _port: u8, _pin: u8, level: PinLevel) {
            self.events.push((level, self.clock.peek_ms()));
        }
    }

    #[test]
    fn test_phase_durations_are_half_periods() {
        let clock = MockClock::new();
        let mut gpio = TimedGpio {
            clock: &clock,
            events: Vec::new(),
        };

        run(&mut gpio, &clock, &BlinkConfig::default());

        assert_eq!(gpio.events.len(), 10);
        for window in gpio.events.windows(2) {
            let (_, start) = window[0];
            let (_, end) = window[1];
            let phase = end.wrapping_sub(start);
            assert!(
                phase >= 500 && phase <= 505,
                "phase lasted {phase} ms"
            );
        }
    }
}
