mod calibration;
mod classify;
mod engine;
mod scaling;

use core::fmt::Write;

use smart_leds::RGB8;

pub use calibration::{CalibrationRange, CalibrationTracker, ColorCalibration, RawColorSample};
pub use classify::{ColorIdentifier, classify};
pub use engine::{ColorEngine, ColorSelectPins};
pub use scaling::{FrequencyScaling, Photodiode};

pub type Rgb = RGB8;

/// Short "R:255 G:0 B:12" label for a normalized color
pub fn rgb_label(rgb: Rgb) -> heapless::String<20> {
    let mut label = heapless::String::new();
    // 20 bytes fit the longest label, "R:255 G:255 B:255"
    let _ = write!(label, "R:{} G:{} B:{}", rgb.r, rgb.g, rgb.b);
    label
}
