//! Opaque sRGB color value and `#RRGGBB` text conversion.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;

use crate::error::ColorParseError;

/// An opaque sRGB color with channels in `[0, 1]`.
///
/// Channels are clamped on construction, so every `Color` is in range no
/// matter what the picker handed over. Alpha is not represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    /// Pure black, the default foreground.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Pure white, the default background.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Create a color from unit-range channels. Out-of-range values are
    /// clamped and NaN becomes 0.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
        }
    }

    /// Create a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Red channel in `[0, 1]`.
    pub const fn r(&self) -> f64 {
        self.r
    }

    /// Green channel in `[0, 1]`.
    pub const fn g(&self) -> f64 {
        self.g
    }

    /// Blue channel in `[0, 1]`.
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Channels as an `[r, g, b]` array.
    pub const fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Quantize to 8-bit channels with `round(c × 255)`.
    pub fn to_rgb8(&self) -> [u8; 3] {
        self.channels().map(quantize)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb8(r, g, b)
    }
}

impl From<Srgb<f32>> for Color {
    fn from(c: Srgb<f32>) -> Self {
        Self::new(f64::from(c.red), f64::from(c.green), f64::from(c.blue))
    }
}

impl From<Srgb<u8>> for Color {
    fn from(c: Srgb<u8>) -> Self {
        Self::from_rgb8(c.red, c.green, c.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(c: Color) -> Self {
        let [r, g, b] = c.to_rgb8();
        Srgb::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

/// Format a color as uppercase `#RRGGBB`.
pub fn to_hex(color: Color) -> String {
    color.to_string()
}

/// Parse `#RRGGBB` or `#RGB` (leading `#` optional, case-insensitive).
///
/// Surrounding whitespace is ignored.
pub fn parse_hex(text: &str) -> Result<Color, ColorParseError> {
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if digits.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let len = digits.chars().count();
    if len != 3 && len != 6 {
        return Err(ColorParseError::InvalidLength(len));
    }

    let mut nibbles = [0_u8; 6];
    for (slot, ch) in nibbles.iter_mut().zip(digits.chars()) {
        *slot = ch.to_digit(16).ok_or(ColorParseError::InvalidDigit(ch))? as u8;
    }

    let [r, g, b] = if len == 3 {
        [nibbles[0] * 17, nibbles[1] * 17, nibbles[2] * 17]
    } else {
        [
            (nibbles[0] << 4) | nibbles[1],
            (nibbles[2] << 4) | nibbles[3],
            (nibbles[4] << 4) | nibbles[5],
        ]
    };
    Ok(Color::from_rgb8(r, g, b))
}

/// Force a channel into `[0, 1]`, mapping NaN to 0.
pub(crate) fn clamp_unit(c: f64) -> f64 {
    if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) }
}

fn quantize(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}
