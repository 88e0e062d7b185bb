//! Pulse width measurement on a digital input line.
//!
//! Both sensors report their raw signal as the width of a pulse: the color
//! sensor as a square wave whose LOW phase shrinks as light grows, the
//! rangefinder as a HIGH echo whose length is the sound round-trip time.

use embassy_time::{Duration, Instant};
use embedded_hal::digital::{InputPin, OutputPin};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::Clock;

/// Width reported when no pulse was observed
pub const NO_PULSE: u32 = 0;

/// Logic level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Level from a boolean "is high" reading
    pub const fn from_high(is_high: bool) -> Self {
        if is_high { Self::High } else { Self::Low }
    }

    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

/// Drive an output line to `level`
pub(crate) fn drive<O: OutputPin>(pin: &mut O, level: Level) -> Result<(), O::Error> {
    match level {
        Level::Low => pin.set_low(),
        Level::High => pin.set_high(),
    }
}

/// Something that can time a single pulse on an input line
///
/// Implement this trait to plug in hardware input capture, a polling loop
/// or a scripted fake.
pub trait PulseSource {
    /// Measure the next complete pulse at `level`, in microseconds
    ///
    /// Any pulse already in progress is skipped. Returns `None` when no
    /// complete pulse is seen before `timeout` elapses.
    fn measure_pulse(&mut self, level: Level, timeout: Duration) -> Option<u32>;
}

impl<T: PulseSource + ?Sized> PulseSource for &mut T {
    fn measure_pulse(&mut self, level: Level, timeout: Duration) -> Option<u32> {
        (**self).measure_pulse(level, timeout)
    }
}

/// Collapse a pulse reading into the `0 = no signal` sentinel
pub const fn width_or_sentinel(width: Option<u32>) -> u32 {
    match width {
        Some(width) => width,
        None => NO_PULSE,
    }
}

/// Polling pulse timer over an `embedded-hal` input pin
///
/// Busy-waits on the pin and timestamps the edges with a [`Clock`]. Resolution
/// is bounded by the clock tick and the polling loop latency. A failed pin
/// read is treated like a missing pulse.
pub struct PinPulseTimer<P, C> {
    pin: P,
    clock: C,
}

impl<P: InputPin, C: Clock> PinPulseTimer<P, C> {
    pub const fn new(pin: P, clock: C) -> Self {
        Self { pin, clock }
    }

    /// Release the pin and the clock
    pub fn release(self) -> (P, C) {
        (self.pin, self.clock)
    }

    fn level(&mut self) -> Option<Level> {
        self.pin.is_high().ok().map(Level::from_high)
    }

    fn measure_edges(&mut self, level: Level, timeout: Duration) -> Option<u32> {
        let started = self.clock.now();
        self.wait_while(level, true, started, timeout)?;
        self.wait_while(level, false, started, timeout)?;
        let edge = self.clock.now();
        self.wait_while(level, true, started, timeout)?;
        let width = self.clock.elapsed_since(edge);
        Some(u32::try_from(width.as_micros()).unwrap_or(u32::MAX))
    }

    /// Spin while the line is (`present = true`) or is not at `level`
    fn wait_while(
        &mut self,
        level: Level,
        present: bool,
        started: Instant,
        timeout: Duration,
    ) -> Option<()> {
        loop {
            let current = self.level()?;
            if (current == level) != present {
                return Some(());
            }
            if self.clock.elapsed_since(started) >= timeout {
                return None;
            }
        }
    }
}

impl<P: InputPin, C: Clock> PulseSource for PinPulseTimer<P, C> {
    fn measure_pulse(&mut self, level: Level, timeout: Duration) -> Option<u32> {
        let measured = self.measure_edges(level, timeout);

        #[cfg(feature = "esp32-log")]
        if measured.is_none() {
            println!("[PinPulseTimer] no {:?} pulse within {:?}", level, timeout);
        }

        measured
    }
}
