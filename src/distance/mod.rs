//! Ultrasonic ranging
//!
//! The HC-SR04 answers a 10 µs trigger with a HIGH echo as long as the sound
//! round trip. Distance is half the round trip times the speed of sound.

mod engine;
mod measurement;

pub use engine::DistanceEngine;
pub use measurement::{
    DistanceMeasurement, DistanceUnit, OVERFLOW_LABEL, SpeedOfSound, TimeoutPolicy,
};
