use crate::pulse::Level;

const SCALING_ID_OFF: u8 = 0;
const SCALING_ID_LOW: u8 = 1;
const SCALING_ID_MEDIUM: u8 = 2;
const SCALING_ID_HIGH: u8 = 3;

/// Output frequency scaling of the TCS230 (S0/S1 select lines)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum FrequencyScaling {
    /// Power down
    Off = SCALING_ID_OFF,
    /// 2% of full-scale frequency
    Low = SCALING_ID_LOW,
    /// 20% of full-scale frequency
    #[default]
    Medium = SCALING_ID_MEDIUM,
    /// 100% of full-scale frequency
    High = SCALING_ID_HIGH,
}

impl FrequencyScaling {
    /// Scaling from its raw code
    ///
    /// Unknown codes fall back to 20%, the mode the module ships in.
    pub const fn from_raw(value: u8) -> Self {
        match value {
            SCALING_ID_OFF => Self::Off,
            SCALING_ID_LOW => Self::Low,
            SCALING_ID_HIGH => Self::High,
            _ => Self::Medium,
        }
    }

    /// Levels for the (S0, S1) lines
    pub const fn select_levels(self) -> (Level, Level) {
        match self {
            Self::Off => (Level::Low, Level::Low),
            Self::Low => (Level::Low, Level::High),
            Self::Medium => (Level::High, Level::Low),
            Self::High => (Level::High, Level::High),
        }
    }

    /// Output frequency as a percentage of full scale
    pub const fn percent(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Low => 2,
            Self::Medium => 20,
            Self::High => 100,
        }
    }
}

/// Photodiode bank selected by the S2/S3 lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Photodiode {
    Red,
    Green,
    Blue,
}

impl Photodiode {
    /// Read order used for every raw sample
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Levels for the (S2, S3) lines
    pub const fn select_levels(self) -> (Level, Level) {
        match self {
            Self::Red => (Level::Low, Level::Low),
            Self::Green => (Level::High, Level::High),
            Self::Blue => (Level::Low, Level::High),
        }
    }
}
