//! Timing constants, thresholds and engine configuration.
//!
//! Every delay the sensors depend on is a named constant here. Engines read
//! them through the config structs, so a board with slower optics can
//! override any of them without touching the measurement logic.

use embassy_time::Duration;

use crate::color::{CalibrationRange, ColorCalibration, FrequencyScaling};
use crate::distance::{SpeedOfSound, TimeoutPolicy};

/// Low settle time before the ultrasonic trigger pulse
pub const TRIGGER_SETTLE: Duration = Duration::from_micros(2);

/// Width of the ultrasonic trigger pulse
pub const TRIGGER_PULSE: Duration = Duration::from_micros(10);

/// Pause between ultrasonic samples so the previous echo dies out
pub const INTER_SAMPLE_DELAY: Duration = Duration::from_millis(20);

/// Pause after switching photodiodes before the next channel is read
pub const STABILIZATION_DELAY: Duration = Duration::from_millis(200);

/// Pause between calibration sampling rounds
pub const CALIBRATION_INTERVAL: Duration = Duration::from_millis(100);

/// Default length of the auto-calibration window
pub const DEFAULT_CALIBRATION_WINDOW: Duration = Duration::from_millis(5000);

/// Longest time a single pulse measurement may block
pub const PULSE_TIMEOUT: Duration = Duration::from_secs(1);

/// Minimum RGB margin for a channel to count as dominant.
///
/// Also the floor below which all-dark readings mean "no color".
pub const COLOR_DETECTION_THRESHOLD: u8 = 20;

/// Minimum raw spread every channel must show for calibration to succeed
pub const MIN_CALIBRATION_SPREAD: u32 = 10;

/// Upper bound of the raw pulse-width domain, widths above it clamp here during calibration
pub const RAW_PULSE_CEILING: u32 = 1000;

/// Default proximity threshold, centimeters
pub const PROXIMITY_THRESHOLD_CM: f32 = 10.0;

/// Factory calibration for a TCS230 module at 20% scaling
pub const DEFAULT_COLOR_CALIBRATION: ColorCalibration = ColorCalibration {
    red: CalibrationRange::new(25, 140),
    green: CalibrationRange::new(32, 214),
    blue: CalibrationRange::new(25, 170),
};

/// Delays used by the color engine
#[derive(Debug, Clone, Copy)]
pub struct ColorTimings {
    /// Pause between photodiode channel reads
    pub stabilization: Duration,
    /// Pause between calibration sampling rounds
    pub calibration_interval: Duration,
    /// Pulse measurement ceiling
    pub pulse_timeout: Duration,
}

impl Default for ColorTimings {
    fn default() -> Self {
        Self {
            stabilization: STABILIZATION_DELAY,
            calibration_interval: CALIBRATION_INTERVAL,
            pulse_timeout: PULSE_TIMEOUT,
        }
    }
}

/// Configuration for the color engine
#[derive(Debug, Clone)]
pub struct ColorEngineConfig {
    pub scaling: FrequencyScaling,
    pub calibration: ColorCalibration,
    pub timings: ColorTimings,
    /// Classification margin, see [`COLOR_DETECTION_THRESHOLD`]
    pub detection_threshold: u8,
    /// Calibration acceptance spread, see [`MIN_CALIBRATION_SPREAD`]
    pub min_spread: u32,
}

impl Default for ColorEngineConfig {
    fn default() -> Self {
        Self {
            scaling: FrequencyScaling::default(),
            calibration: DEFAULT_COLOR_CALIBRATION,
            timings: ColorTimings::default(),
            detection_threshold: COLOR_DETECTION_THRESHOLD,
            min_spread: MIN_CALIBRATION_SPREAD,
        }
    }
}

/// Delays used by the distance engine
#[derive(Debug, Clone, Copy)]
pub struct DistanceTimings {
    pub trigger_settle: Duration,
    pub trigger_pulse: Duration,
    pub inter_sample: Duration,
    pub echo_timeout: Duration,
}

impl Default for DistanceTimings {
    fn default() -> Self {
        Self {
            trigger_settle: TRIGGER_SETTLE,
            trigger_pulse: TRIGGER_PULSE,
            inter_sample: INTER_SAMPLE_DELAY,
            echo_timeout: PULSE_TIMEOUT,
        }
    }
}

/// Configuration for the distance engine
#[derive(Debug, Clone)]
pub struct DistanceEngineConfig {
    pub speed_of_sound: SpeedOfSound,
    pub timings: DistanceTimings,
    pub timeout_policy: TimeoutPolicy,
    /// Threshold used by `is_object_in_range`, centimeters
    pub proximity_threshold_cm: f32,
}

impl Default for DistanceEngineConfig {
    fn default() -> Self {
        Self {
            speed_of_sound: SpeedOfSound::default(),
            timings: DistanceTimings::default(),
            timeout_policy: TimeoutPolicy::default(),
            proximity_threshold_cm: PROXIMITY_THRESHOLD_CM,
        }
    }
}
