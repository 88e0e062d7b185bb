use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::{Clock, pause};
use crate::color::calibration::{CalibrationTracker, ColorCalibration, RawColorSample};
use crate::color::classify::{ColorIdentifier, classify};
use crate::color::scaling::{FrequencyScaling, Photodiode};
use crate::color::Rgb;
use crate::config::{ColorEngineConfig, ColorTimings, DEFAULT_CALIBRATION_WINDOW};
use crate::error::Error;
use crate::pulse::{Level, PulseSource, drive, width_or_sentinel};

/// Select lines of a TCS230 module
#[derive(Debug)]
pub struct ColorSelectPins<O> {
    /// Frequency scaling select 0
    pub s0: O,
    /// Frequency scaling select 1
    pub s1: O,
    /// Photodiode select 2
    pub s2: O,
    /// Photodiode select 3
    pub s3: O,
}

/// Color engine - measures, calibrates and classifies a TCS230
///
/// Every call blocks for its physical measurement: a full RGB read takes two
/// stabilization delays plus three pulse periods.
pub struct ColorEngine<O, T, D, C> {
    // Hardware
    pins: ColorSelectPins<O>,
    output: T,
    delay: D,
    clock: C,

    // Configuration
    timings: ColorTimings,
    detection_threshold: u8,
    min_spread: u32,

    // State
    calibration: ColorCalibration,
    scaling: FrequencyScaling,
}

impl<O, T, D, C> ColorEngine<O, T, D, C>
where
    O: OutputPin,
    T: PulseSource,
    D: DelayNs,
    C: Clock,
{
    /// Create a new color engine
    ///
    /// The select lines are not driven until [`initialize`](Self::initialize).
    pub fn new(
        pins: ColorSelectPins<O>,
        output: T,
        delay: D,
        clock: C,
        config: &ColorEngineConfig,
    ) -> Self {
        Self {
            pins,
            output,
            delay,
            clock,
            timings: config.timings,
            detection_threshold: config.detection_threshold,
            min_spread: config.min_spread,
            calibration: config.calibration,
            scaling: config.scaling,
        }
    }

    /// Drive the scaling select lines and remember the mode
    pub fn initialize(&mut self, scaling: FrequencyScaling) -> Result<(), Error<O::Error>> {
        let (s0, s1) = scaling.select_levels();
        drive(&mut self.pins.s0, s0)?;
        drive(&mut self.pins.s1, s1)?;
        self.scaling = scaling;

        #[cfg(feature = "esp32-log")]
        println!("[ColorEngine.initialize] scaling {}%", scaling.percent());

        Ok(())
    }

    pub const fn scaling(&self) -> FrequencyScaling {
        self.scaling
    }

    pub const fn calibration(&self) -> ColorCalibration {
        self.calibration
    }

    /// Replace all six calibration bounds
    ///
    /// Bounds with `max <= min` on any channel are refused with
    /// [`Error::InsufficientRange`] and the current calibration is kept.
    pub fn set_calibration(
        &mut self,
        calibration: ColorCalibration,
    ) -> Result<(), Error<O::Error>> {
        if !calibration.is_valid() {
            return Err(Error::InsufficientRange(calibration.spread()));
        }
        self.calibration = calibration;
        Ok(())
    }

    /// Discover calibration bounds over a wall-clock window
    ///
    /// Sweep the sensor over the darkest and brightest surfaces it will see
    /// while this runs. The discovered bounds are stored and returned only if
    /// every channel moved by at least the configured spread; otherwise the
    /// previous calibration is kept and [`Error::InsufficientRange`] is
    /// returned.
    pub fn run_calibration(
        &mut self,
        window: Duration,
    ) -> Result<ColorCalibration, Error<O::Error>> {
        let started = self.clock.now();
        let mut tracker = CalibrationTracker::new();

        while self.clock.elapsed_since(started) < window {
            let raw = self.read_raw_values()?;
            tracker.observe(raw);
            pause(&mut self.delay, self.timings.calibration_interval);
        }

        match tracker.finish(self.min_spread) {
            Ok(calibration) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[ColorEngine.run_calibration] accepted {:?} after {} samples",
                    calibration,
                    tracker.samples()
                );
                self.calibration = calibration;
                Ok(calibration)
            }
            Err(spread) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[ColorEngine.run_calibration] rejected, spread {:?} after {} samples",
                    spread,
                    tracker.samples()
                );
                Err(Error::InsufficientRange(spread))
            }
        }
    }

    /// Run calibration over the default five second window
    pub fn run_default_calibration(&mut self) -> Result<ColorCalibration, Error<O::Error>> {
        self.run_calibration(DEFAULT_CALIBRATION_WINDOW)
    }

    /// Select a photodiode and measure one LOW pulse
    ///
    /// Returns `0` if the output line stayed silent.
    pub fn read_channel(&mut self, diode: Photodiode) -> Result<u32, Error<O::Error>> {
        let (s2, s3) = diode.select_levels();
        drive(&mut self.pins.s2, s2)?;
        drive(&mut self.pins.s3, s3)?;

        let width = self
            .output
            .measure_pulse(Level::Low, self.timings.pulse_timeout);

        #[cfg(feature = "esp32-log")]
        if width.is_none() {
            println!("[ColorEngine.read_channel] {:?} timed out", diode);
        }

        Ok(width_or_sentinel(width))
    }

    /// Read red, green and blue pulse widths, uncalibrated
    pub fn read_raw_values(&mut self) -> Result<RawColorSample, Error<O::Error>> {
        let mut sample = RawColorSample::default();
        for (index, diode) in Photodiode::ALL.into_iter().enumerate() {
            if index > 0 {
                pause(&mut self.delay, self.timings.stabilization);
            }
            let width = self.read_channel(diode)?;
            sample.set_channel(diode, width);
        }
        Ok(sample)
    }

    /// Read a calibrated RGB triple
    pub fn read_rgb(&mut self) -> Result<Rgb, Error<O::Error>> {
        let raw = self.read_raw_values()?;
        Ok(self.calibration.normalize(raw))
    }

    /// Read and classify the dominant color
    pub fn detect_color(&mut self) -> Result<ColorIdentifier, Error<O::Error>> {
        let rgb = self.read_rgb()?;
        Ok(classify(rgb, self.detection_threshold))
    }

    /// Tear down the engine and hand the hardware back
    pub fn release(self) -> (ColorSelectPins<O>, T, D, C) {
        (self.pins, self.output, self.delay, self.clock)
    }
}
