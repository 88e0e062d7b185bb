use core::fmt;

/// Per-channel spread (`max - min`) seen during a calibration window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelSpread {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl ChannelSpread {
    /// Smallest spread across the three channels
    pub fn narrowest(self) -> u32 {
        self.red.min(self.green).min(self.blue)
    }
}

/// Engine error
///
/// Missing pulses are not errors; they surface as the `0` sentinel or as an
/// excluded sample. `E` is the error type of the output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// An output line rejected a level change
    Line(E),
    /// Calibration saw too little dynamic range; stored bounds are unchanged
    InsufficientRange(ChannelSpread),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Line(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(error) => write!(f, "line error: {:?}", error),
            Self::InsufficientRange(spread) => write!(
                f,
                "calibration range too narrow (r={}, g={}, b={})",
                spread.red, spread.green, spread.blue
            ),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
