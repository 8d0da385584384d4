//! 8-bit colors and channel quantization.
//!
//! Frame buffer pixels are packed as ARGB `u32` (`0xAARRGGBB`).

use serde::{Deserialize, Serialize};

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }
}

/// How an interpolated channel value becomes an 8-bit channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelMode {
    /// Truncate toward zero, then wrap modulo 256.
    ///
    /// A lit channel of 300.0 becomes 44. Matches the classic integer-cast
    /// behavior of software renderers that never clamp.
    #[default]
    Wrap,
    /// Clamp to [0, 255], then truncate. 300.0 becomes 255.
    Saturate,
}

impl ChannelMode {
    #[inline]
    pub fn quantize(self, value: f64) -> u8 {
        match self {
            // `as i64` truncates toward zero and maps NaN to 0
            ChannelMode::Wrap => (value as i64).rem_euclid(256) as u8,
            // `as u8` saturates at both ends and maps NaN to 0
            ChannelMode::Saturate => value as u8,
        }
    }
}

impl std::fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelMode::Wrap => write!(f, "wrap"),
            ChannelMode::Saturate => write!(f, "saturate"),
        }
    }
}

impl std::str::FromStr for ChannelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wrap" => Ok(ChannelMode::Wrap),
            "saturate" => Ok(ChannelMode::Saturate),
            other => Err(format!(
                "unknown channel mode '{}' (expected wrap or saturate)",
                other
            )),
        }
    }
}
