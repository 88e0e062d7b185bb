//! Calibration and classification engine for a TCS230 color sensor and an
//! HC-SR04 ultrasonic rangefinder.
//!
//! Both engines are synchronous and blocking: every call returns once its
//! physical measurement has finished or timed out. Hardware is reached only
//! through `embedded-hal` pins and delays, a [`PulseSource`] and a [`Clock`].

#![no_std]

pub mod clock;
pub mod color;
pub mod config;
pub mod distance;
pub mod error;
pub mod math;
pub mod pulse;

pub use clock::{Clock, SystemClock};
pub use color::{
    CalibrationRange, ColorCalibration, ColorEngine, ColorIdentifier, ColorSelectPins,
    FrequencyScaling, Photodiode, RawColorSample, Rgb,
};
pub use config::{ColorEngineConfig, ColorTimings, DistanceEngineConfig, DistanceTimings};
pub use distance::{
    DistanceEngine, DistanceMeasurement, DistanceUnit, SpeedOfSound, TimeoutPolicy,
};
pub use error::{ChannelSpread, Error};
pub use pulse::{Level, PinPulseTimer, PulseSource};

pub use embassy_time::{Duration, Instant};
