/// Linearly remap `value` from `[in_min, in_max]` onto `[out_min, out_max]`
///
/// Integer math with truncation toward zero, no clamping: values outside the
/// input range extrapolate. Output ranges may be inverted (`out_min > out_max`).
/// A degenerate input range maps everything at or below `in_min` to `out_min`
/// and everything above it to `out_max`.
#[inline]
pub const fn remap(value: i64, in_min: i64, in_max: i64, out_min: i64, out_max: i64) -> i64 {
    let span = in_max - in_min;
    if span == 0 {
        return if value <= in_min { out_min } else { out_max };
    }
    (value - in_min) * (out_max - out_min) / span + out_min
}

/// Clamp `value` into `[low, high]`
#[inline]
pub const fn constrain(value: i64, low: i64, high: i64) -> i64 {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

/// Remap a raw reading onto `0..=255` and clamp
#[inline]
#[allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub const fn remap_to_u8(value: i64, in_min: i64, in_max: i64, out_min: u8, out_max: u8) -> u8 {
    let mapped = remap(value, in_min, in_max, out_min as i64, out_max as i64);
    constrain(mapped, 0, 255) as u8
}
