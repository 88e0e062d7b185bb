//! Monotonic time source.
//!
//! Engines never read a global timer directly. Pulse timeouts and calibration
//! windows are measured against a [`Clock`], so tests can drive time by hand.

use embassy_time::{Duration, Instant};
use embedded_hal::delay::DelayNs;

/// Monotonic clock used for pulse timeouts and calibration windows
pub trait Clock {
    /// Current instant
    fn now(&self) -> Instant;

    /// Time elapsed since `since`
    ///
    /// Saturates to zero if `since` lies in the future.
    fn elapsed_since(&self, since: Instant) -> Duration {
        let now = self.now();
        if now.as_ticks() > since.as_ticks() {
            now.duration_since(since)
        } else {
            Duration::from_ticks(0)
        }
    }
}

/// Clock backed by the `embassy-time` driver of the target platform
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

impl<C: Clock> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Block on `delay` for `duration`, at microsecond resolution
pub(crate) fn pause<D: DelayNs>(delay: &mut D, duration: Duration) {
    let micros = u32::try_from(duration.as_micros()).unwrap_or(u32::MAX);
    if micros > 0 {
        delay.delay_us(micros);
    }
}
