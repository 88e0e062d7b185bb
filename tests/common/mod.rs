#![allow(dead_code)]

use core::convert::Infallible;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use tcs_sonar_engine::{Clock, Duration, Instant, Level, PulseSource};

/// Hand-driven clock with nanosecond resolution, shared by clones
#[derive(Clone, Default)]
pub struct FakeClock {
    nanos: Rc<Cell<u64>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_nanos(&self, nanos: u64) {
        self.nanos.set(self.nanos.get() + nanos);
    }

    pub fn advance_micros(&self, micros: u64) {
        self.advance_nanos(micros * 1000);
    }

    pub fn elapsed_micros(&self) -> u64 {
        self.nanos.get() / 1000
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        Instant::from_micros(self.elapsed_micros())
    }
}

/// Delay that moves a [`FakeClock`] forward and records each request
#[derive(Clone, Default)]
pub struct FakeDelay {
    clock: FakeClock,
    requests: Rc<RefCell<Vec<u32>>>,
}

impl FakeDelay {
    pub fn new(clock: FakeClock) -> Self {
        Self {
            clock,
            requests: Rc::default(),
        }
    }

    /// Every `delay_us` request so far, in microseconds
    pub fn requests(&self) -> Vec<u32> {
        self.requests.borrow().clone()
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_nanos(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.requests.borrow_mut().push(us);
        self.clock.advance_micros(u64::from(us));
    }
}

/// Pulse source replaying a fixed list of widths
#[derive(Clone)]
pub struct ScriptedPulses {
    widths: Vec<Option<u32>>,
    next: Rc<Cell<usize>>,
    cycle: bool,
    requests: Rc<RefCell<Vec<(Level, Duration)>>>,
}

impl ScriptedPulses {
    /// Replay `widths` once, then report silence
    pub fn new(widths: &[Option<u32>]) -> Self {
        Self {
            widths: widths.to_vec(),
            next: Rc::default(),
            cycle: false,
            requests: Rc::default(),
        }
    }

    /// Replay `widths` forever
    pub fn cycle(widths: &[Option<u32>]) -> Self {
        Self {
            cycle: true,
            ..Self::new(widths)
        }
    }

    /// Replay the same width forever
    pub fn constant(width: u32) -> Self {
        Self::cycle(&[Some(width)])
    }

    /// Every (level, timeout) measured so far
    pub fn requests(&self) -> Vec<(Level, Duration)> {
        self.requests.borrow().clone()
    }

    pub fn consumed(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl PulseSource for ScriptedPulses {
    fn measure_pulse(&mut self, level: Level, timeout: Duration) -> Option<u32> {
        self.requests.borrow_mut().push((level, timeout));
        let mut index = self.next.get();
        if index >= self.widths.len() {
            if !self.cycle || self.widths.is_empty() {
                return None;
            }
            index = 0;
        }
        self.next.set(index + 1);
        self.widths[index]
    }
}

/// Output line that accepts every level
#[derive(Debug, Default)]
pub struct NullPin;

impl ErrorType for NullPin {
    type Error = Infallible;
}

impl OutputPin for NullPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Output line that rejects every level
#[derive(Debug, Default)]
pub struct BrokenPin;

impl ErrorType for BrokenPin {
    type Error = ErrorKind;
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }
}

/// Input line replaying a level per read, one microsecond per read
///
/// Holds the last level once the script runs out.
pub struct ScriptedLine {
    levels: Vec<bool>,
    next: usize,
    clock: FakeClock,
    fail: bool,
}

impl ScriptedLine {
    pub fn new(levels: &[bool], clock: FakeClock) -> Self {
        Self {
            levels: levels.to_vec(),
            next: 0,
            clock,
            fail: false,
        }
    }

    pub fn failing(clock: FakeClock) -> Self {
        Self {
            fail: true,
            ..Self::new(&[false], clock)
        }
    }
}

impl ErrorType for ScriptedLine {
    type Error = ErrorKind;
}

impl InputPin for ScriptedLine {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.clock.advance_micros(1);
        let index = self.next.min(self.levels.len() - 1);
        self.next += 1;
        Ok(self.levels[index])
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
