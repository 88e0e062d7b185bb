use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::clock::pause;
use crate::config::{DistanceEngineConfig, DistanceTimings};
use crate::distance::measurement::{
    DistanceMeasurement, DistanceUnit, SpeedOfSound, TimeoutPolicy,
};
use crate::error::Error;
use crate::pulse::{Level, NO_PULSE, PulseSource, drive};

/// Distance engine - pings an HC-SR04 and converts echoes to distances
pub struct DistanceEngine<O, T, D> {
    // Hardware
    trigger: O,
    echo: T,
    delay: D,

    // Configuration
    timings: DistanceTimings,
    timeout_policy: TimeoutPolicy,
    proximity_threshold_cm: f32,

    // State
    speed_of_sound: SpeedOfSound,
}

impl<O, T, D> DistanceEngine<O, T, D>
where
    O: OutputPin,
    T: PulseSource,
    D: DelayNs,
{
    pub fn new(trigger: O, echo: T, delay: D, config: &DistanceEngineConfig) -> Self {
        Self {
            trigger,
            echo,
            delay,
            timings: config.timings,
            timeout_policy: config.timeout_policy,
            proximity_threshold_cm: config.proximity_threshold_cm,
            speed_of_sound: config.speed_of_sound,
        }
    }

    /// Park the trigger line low
    pub fn initialize(&mut self) -> Result<(), Error<O::Error>> {
        drive(&mut self.trigger, Level::Low)?;
        Ok(())
    }

    /// Fire one trigger pulse and time the echo
    ///
    /// Returns the round-trip time in microseconds, `None` if nothing came back.
    pub fn ping(&mut self) -> Result<Option<u32>, Error<O::Error>> {
        drive(&mut self.trigger, Level::Low)?;
        pause(&mut self.delay, self.timings.trigger_settle);
        drive(&mut self.trigger, Level::High)?;
        pause(&mut self.delay, self.timings.trigger_pulse);
        drive(&mut self.trigger, Level::Low)?;

        let echo = self
            .echo
            .measure_pulse(Level::High, self.timings.echo_timeout);

        #[cfg(feature = "esp32-log")]
        if echo.is_none() {
            println!("[DistanceEngine.ping] no echo");
        }

        Ok(echo)
    }

    /// Average `samples` pings into one distance
    ///
    /// At least one ping is always taken. Pings are spaced by the inter-sample
    /// delay; no delay follows the last one.
    #[allow(clippy::cast_precision_loss)]
    pub fn get_distance(
        &mut self,
        unit: DistanceUnit,
        samples: u8,
    ) -> Result<DistanceMeasurement, Error<O::Error>> {
        let samples = samples.max(1);
        let mut total_cm = 0.0_f32;
        let mut counted: u8 = 0;

        for index in 0..samples {
            // A zero-width echo is the no-signal sentinel, same as a timeout
            let echo = self.ping()?.filter(|&micros| micros != NO_PULSE);
            match (echo, self.timeout_policy) {
                (Some(micros), _) => {
                    total_cm += self.speed_of_sound.echo_to_centimeters(micros as f32);
                    counted += 1;
                }
                (None, TimeoutPolicy::IncludeAsZero) => counted += 1,
                (None, TimeoutPolicy::Discard) => {}
            }

            if index + 1 < samples {
                pause(&mut self.delay, self.timings.inter_sample);
            }
        }

        let average_cm = if counted == 0 {
            0.0
        } else {
            total_cm / f32::from(counted)
        };

        Ok(DistanceMeasurement::from_centimeters(average_cm, unit))
    }

    /// Single ping proximity check
    ///
    /// A silent ping never counts as detected, whatever the threshold.
    pub fn is_object_detected(&mut self, threshold_cm: f32) -> Result<bool, Error<O::Error>> {
        let distance = self.get_distance(DistanceUnit::Centimeters, 1)?;
        Ok(distance.is_within(threshold_cm))
    }

    /// Proximity check against the configured threshold
    pub fn is_object_in_range(&mut self) -> Result<bool, Error<O::Error>> {
        self.is_object_detected(self.proximity_threshold_cm)
    }

    pub const fn speed_of_sound(&self) -> SpeedOfSound {
        self.speed_of_sound
    }

    pub fn set_speed_of_sound(&mut self, speed: SpeedOfSound) {
        self.speed_of_sound = speed;
    }

    /// Recompute the speed of sound for the air temperature
    pub fn calibrate_for_temperature(&mut self, celsius: f32) {
        self.speed_of_sound = SpeedOfSound::for_temperature(celsius);

        #[cfg(feature = "esp32-log")]
        println!(
            "[DistanceEngine.calibrate_for_temperature] {} C -> {} cm/us",
            celsius,
            self.speed_of_sound.cm_per_us()
        );
    }

    pub const fn timeout_policy(&self) -> TimeoutPolicy {
        self.timeout_policy
    }

    pub fn set_timeout_policy(&mut self, policy: TimeoutPolicy) {
        self.timeout_policy = policy;
    }

    /// Tear down the engine and hand the hardware back
    pub fn release(self) -> (O, T, D) {
        (self.trigger, self.echo, self.delay)
    }
}
