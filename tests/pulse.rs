mod common;

mod tests {
    use tcs_sonar_engine::pulse::{NO_PULSE, width_or_sentinel};
    use tcs_sonar_engine::{Clock, Duration, Instant, Level, PinPulseTimer, PulseSource};

    use crate::common::{FakeClock, ScriptedLine};

    const L: bool = false;
    const H: bool = true;

    #[test]
    fn test_measures_high_pulse_width() {
        let clock = FakeClock::new();
        let line = ScriptedLine::new(&[L, L, L, H, H, H, H, H, L], clock.clone());
        let mut timer = PinPulseTimer::new(line, clock);

        let width = timer.measure_pulse(Level::High, Duration::from_millis(10));
        assert_eq!(width, Some(5));
    }

    #[test]
    fn test_skips_pulse_already_in_progress() {
        let clock = FakeClock::new();
        let line = ScriptedLine::new(&[H, H, L, L, H, H, L], clock.clone());
        let mut timer = PinPulseTimer::new(line, clock);

        let width = timer.measure_pulse(Level::High, Duration::from_millis(10));
        assert_eq!(width, Some(2));
    }

    #[test]
    fn test_measures_low_pulse_width() {
        let clock = FakeClock::new();
        let line = ScriptedLine::new(&[H, L, L, L, H], clock.clone());
        let mut timer = PinPulseTimer::new(line, clock);

        let width = timer.measure_pulse(Level::Low, Duration::from_millis(10));
        assert_eq!(width, Some(3));
    }

    #[test]
    fn test_silent_line_times_out() {
        let clock = FakeClock::new();
        let line = ScriptedLine::new(&[L], clock.clone());
        let mut timer = PinPulseTimer::new(line, clock.clone());

        let width = timer.measure_pulse(Level::High, Duration::from_micros(50));
        assert_eq!(width, None);
        assert!(clock.elapsed_micros() >= 50);
    }

    #[test]
    fn test_pulse_that_never_ends_times_out() {
        let clock = FakeClock::new();
        let line = ScriptedLine::new(&[L, H], clock.clone());
        let mut timer = PinPulseTimer::new(line, clock);

        let width = timer.measure_pulse(Level::High, Duration::from_micros(100));
        assert_eq!(width, None);
    }

    #[test]
    fn test_read_error_reads_as_no_pulse() {
        let clock = FakeClock::new();
        let line = ScriptedLine::failing(clock.clone());
        let mut timer = PinPulseTimer::new(line, clock);

        let width = timer.measure_pulse(Level::Low, Duration::from_millis(1));
        assert_eq!(width, None);
    }

    #[test]
    fn test_sentinel() {
        assert_eq!(width_or_sentinel(None), NO_PULSE);
        assert_eq!(width_or_sentinel(Some(42)), 42);
        assert_eq!(Level::from_high(true), Level::High);
        assert!(!Level::Low.is_high());
    }

    #[test]
    fn test_elapsed_since_saturates() {
        let clock = FakeClock::new();
        clock.advance_micros(10);
        let future = Instant::from_micros(100);
        assert_eq!(clock.elapsed_since(future), Duration::from_ticks(0));
        assert_eq!(
            clock.elapsed_since(Instant::from_micros(4)),
            Duration::from_micros(6)
        );
    }
}
