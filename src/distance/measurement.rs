use core::fmt::{self, Write};

const CENTIMETERS_PER_INCH: f32 = 2.54;
const MILLIMETERS_PER_CENTIMETER: f32 = 10.0;

/// Label shown when a distance does not fit [`DistanceMeasurement::label`]
pub const OVERFLOW_LABEL: &str = "out of range";

/// Unit a distance is reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    #[default]
    Centimeters,
    Inches,
    Millimeters,
}

impl DistanceUnit {
    /// Convert a value in centimeters into this unit
    pub fn convert_centimeters(self, centimeters: f32) -> f32 {
        match self {
            Self::Centimeters => centimeters,
            Self::Inches => centimeters / CENTIMETERS_PER_INCH,
            Self::Millimeters => centimeters * MILLIMETERS_PER_CENTIMETER,
        }
    }

    /// Convert a value in this unit into centimeters
    pub fn to_centimeters(self, value: f32) -> f32 {
        match self {
            Self::Centimeters => value,
            Self::Inches => value * CENTIMETERS_PER_INCH,
            Self::Millimeters => value / MILLIMETERS_PER_CENTIMETER,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::Inches => "in",
            Self::Millimeters => "mm",
        }
    }
}

/// A single distance reading
///
/// A value of exactly `0` means no echo came back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceMeasurement {
    pub value: f32,
    pub unit: DistanceUnit,
}

impl DistanceMeasurement {
    pub const fn new(value: f32, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    pub fn from_centimeters(centimeters: f32, unit: DistanceUnit) -> Self {
        Self::new(unit.convert_centimeters(centimeters), unit)
    }

    pub fn to_centimeters(self) -> f32 {
        self.unit.to_centimeters(self.value)
    }

    /// Same measurement expressed in another unit
    pub fn convert(self, unit: DistanceUnit) -> Self {
        Self::from_centimeters(self.to_centimeters(), unit)
    }

    /// True when the reading is the no-echo sentinel
    pub fn is_no_signal(self) -> bool {
        self.value <= 0.0
    }

    /// True for a real echo at or closer than `threshold_cm`
    pub fn is_within(self, threshold_cm: f32) -> bool {
        let centimeters = self.to_centimeters();
        centimeters > 0.0 && centimeters <= threshold_cm
    }

    /// Short "12.3 cm" label, one decimal place
    ///
    /// Values too wide for the label read as [`OVERFLOW_LABEL`].
    pub fn label(self) -> heapless::String<16> {
        let mut label = heapless::String::new();
        if write!(label, "{self}").is_err() {
            label.clear();
            let _ = label.push_str(OVERFLOW_LABEL);
        }
        label
    }
}

impl fmt::Display for DistanceMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} {}", self.value, self.unit.symbol())
    }
}

/// Speed of sound in centimeters per microsecond
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedOfSound(f32);

impl SpeedOfSound {
    /// Speed of sound in dry air at 20 °C
    pub const DEFAULT: Self = Self(0.0343);

    pub const fn from_cm_per_us(value: f32) -> Self {
        Self(value)
    }

    pub fn from_meters_per_second(value: f32) -> Self {
        Self(value / 10_000.0)
    }

    /// Speed of sound in air at `celsius`, `331.3 + 0.606 * T` m/s
    pub fn for_temperature(celsius: f32) -> Self {
        Self::from_meters_per_second(331.3 + 0.606 * celsius)
    }

    pub const fn cm_per_us(self) -> f32 {
        self.0
    }

    pub fn meters_per_second(self) -> f32 {
        self.0 * 10_000.0
    }

    /// One-way distance for a round-trip echo of `micros`
    pub fn echo_to_centimeters(self, micros: f32) -> f32 {
        micros * self.0 / 2.0
    }
}

impl Default for SpeedOfSound {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How samples without an echo enter a multi-sample average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeoutPolicy {
    /// Count them as zero-length echoes; drags the mean toward zero
    #[default]
    IncludeAsZero,
    /// Leave them out of the mean; all-silent bursts still read zero
    Discard,
}
