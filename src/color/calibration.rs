//! Calibration bounds and their discovery.

use crate::color::{Photodiode, Rgb};
use crate::config::RAW_PULSE_CEILING;
use crate::error::ChannelSpread;
use crate::math::remap_to_u8;
use crate::pulse::NO_PULSE;

/// Raw pulse widths of one color reading, microseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawColorSample {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl RawColorSample {
    pub const fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    pub const fn channel(&self, diode: Photodiode) -> u32 {
        match diode {
            Photodiode::Red => self.red,
            Photodiode::Green => self.green,
            Photodiode::Blue => self.blue,
        }
    }

    pub(crate) fn set_channel(&mut self, diode: Photodiode, width: u32) {
        match diode {
            Photodiode::Red => self.red = width,
            Photodiode::Green => self.green = width,
            Photodiode::Blue => self.blue = width,
        }
    }
}

/// Raw pulse-width bounds of a single channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalibrationRange {
    /// Shortest pulse, brightest light
    pub min: u32,
    /// Longest pulse, darkest surface
    pub max: u32,
}

impl CalibrationRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Zero-width bounds around a single reading
    pub const fn at(raw: u32) -> Self {
        Self { min: raw, max: raw }
    }

    pub const fn spread(self) -> u32 {
        self.max.saturating_sub(self.min)
    }

    pub const fn is_valid(self) -> bool {
        self.max > self.min
    }

    /// Widen the bounds to include `raw`
    pub fn observe(&mut self, raw: u32) {
        self.min = self.min.min(raw);
        self.max = self.max.max(raw);
    }

    /// Map a raw width onto `0..=255`, short pulses high
    #[allow(clippy::cast_lossless)]
    pub const fn normalize(self, raw: u32) -> u8 {
        remap_to_u8(raw as i64, self.min as i64, self.max as i64, 255, 0)
    }
}

/// Bounds for all three channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCalibration {
    pub red: CalibrationRange,
    pub green: CalibrationRange,
    pub blue: CalibrationRange,
}

impl ColorCalibration {
    pub const fn new(red: CalibrationRange, green: CalibrationRange, blue: CalibrationRange) -> Self {
        Self { red, green, blue }
    }

    pub const fn range(&self, diode: Photodiode) -> CalibrationRange {
        match diode {
            Photodiode::Red => self.red,
            Photodiode::Green => self.green,
            Photodiode::Blue => self.blue,
        }
    }

    /// True when every channel has `max > min`
    pub const fn is_valid(&self) -> bool {
        self.red.is_valid() && self.green.is_valid() && self.blue.is_valid()
    }

    pub const fn spread(&self) -> ChannelSpread {
        ChannelSpread {
            red: self.red.spread(),
            green: self.green.spread(),
            blue: self.blue.spread(),
        }
    }

    /// Normalize a raw sample into an RGB triple
    pub const fn normalize(&self, raw: RawColorSample) -> Rgb {
        Rgb {
            r: self.red.normalize(raw.red),
            g: self.green.normalize(raw.green),
            b: self.blue.normalize(raw.blue),
        }
    }
}

impl Default for ColorCalibration {
    fn default() -> Self {
        crate::config::DEFAULT_COLOR_CALIBRATION
    }
}

/// Running min/max discovery over a calibration window
///
/// Widths are clamped to `RAW_PULSE_CEILING` and timed-out reads are skipped,
/// so each channel's bounds only ever come from real readings.
#[derive(Debug, Clone, Default)]
pub struct CalibrationTracker {
    red: Option<CalibrationRange>,
    green: Option<CalibrationRange>,
    blue: Option<CalibrationRange>,
    samples: u32,
}

impl CalibrationTracker {
    pub const fn new() -> Self {
        Self {
            red: None,
            green: None,
            blue: None,
            samples: 0,
        }
    }

    pub fn observe(&mut self, raw: RawColorSample) {
        track(&mut self.red, raw.red);
        track(&mut self.green, raw.green);
        track(&mut self.blue, raw.blue);
        self.samples = self.samples.saturating_add(1);
    }

    /// Number of samples observed so far
    pub const fn samples(&self) -> u32 {
        self.samples
    }

    /// Spread seen so far, `0` for channels that never answered
    pub fn spread(&self) -> ChannelSpread {
        let spread = |range: Option<CalibrationRange>| range.map_or(0, CalibrationRange::spread);
        ChannelSpread {
            red: spread(self.red),
            green: spread(self.green),
            blue: spread(self.blue),
        }
    }

    /// Accept the discovered bounds if every channel spread reaches `min_spread`
    pub fn finish(&self, min_spread: u32) -> Result<ColorCalibration, ChannelSpread> {
        let spread = self.spread();
        match (self.red, self.green, self.blue) {
            (Some(red), Some(green), Some(blue)) if spread.narrowest() >= min_spread => {
                Ok(ColorCalibration::new(red, green, blue))
            }
            _ => Err(spread),
        }
    }
}

fn track(range: &mut Option<CalibrationRange>, raw: u32) {
    if raw == NO_PULSE {
        return;
    }
    let raw = raw.min(RAW_PULSE_CEILING);
    match range {
        Some(range) => range.observe(raw),
        None => *range = Some(CalibrationRange::at(raw)),
    }
}
