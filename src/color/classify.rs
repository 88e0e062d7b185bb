//! Dominant color classification
//!
//! A channel wins only when it beats both others by more than a fixed margin.
//! Near-equal readings classify as [`ColorIdentifier::None`] instead of
//! flickering between neighbours.

use crate::color::Rgb;

const COLOR_NAME_NONE: &str = "No color";
const COLOR_NAME_RED: &str = "Red";
const COLOR_NAME_GREEN: &str = "Green";
const COLOR_NAME_BLUE: &str = "Blue";

const COLOR_ID_NONE: u8 = 0;
const COLOR_ID_RED: u8 = 1;
const COLOR_ID_GREEN: u8 = 2;
const COLOR_ID_BLUE: u8 = 3;

/// Result of color classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum ColorIdentifier {
    /// Too dark, or no channel clearly dominant
    #[default]
    None = COLOR_ID_NONE,
    Red = COLOR_ID_RED,
    Green = COLOR_ID_GREEN,
    Blue = COLOR_ID_BLUE,
}

impl ColorIdentifier {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            COLOR_ID_NONE => Self::None,
            COLOR_ID_RED => Self::Red,
            COLOR_ID_GREEN => Self::Green,
            COLOR_ID_BLUE => Self::Blue,
            _ => return Option::None,
        })
    }

    /// Human readable name for displays
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => COLOR_NAME_NONE,
            Self::Red => COLOR_NAME_RED,
            Self::Green => COLOR_NAME_GREEN,
            Self::Blue => COLOR_NAME_BLUE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            COLOR_NAME_NONE => Some(Self::None),
            COLOR_NAME_RED => Some(Self::Red),
            COLOR_NAME_GREEN => Some(Self::Green),
            COLOR_NAME_BLUE => Some(Self::Blue),
            _ => Option::None,
        }
    }

    pub const fn is_color(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Classify an RGB triple by its dominant channel
///
/// Returns [`ColorIdentifier::None`] when every channel is below `threshold`
/// or when no channel exceeds both others by more than `threshold`.
pub fn classify(rgb: Rgb, threshold: u8) -> ColorIdentifier {
    let margin = i16::from(threshold);
    let (r, g, b) = (i16::from(rgb.r), i16::from(rgb.g), i16::from(rgb.b));

    if r < margin && g < margin && b < margin {
        return ColorIdentifier::None;
    }

    if r > g + margin && r > b + margin {
        ColorIdentifier::Red
    } else if g > r + margin && g > b + margin {
        ColorIdentifier::Green
    } else if b > r + margin && b > g + margin {
        ColorIdentifier::Blue
    } else {
        ColorIdentifier::None
    }
}
