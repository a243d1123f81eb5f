//! Colors used to paint the ring.
//!
//! [`Color`] is stored as straight (non-premultiplied) RGBA floats so it can
//! be uploaded to GPU pipelines as-is, and parsed from the hex strings theme
//! tables and config files carry.

use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

/// A color in the sRGB color space with an alpha component.
///
/// Values are stored as `f32`s, typically in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a new `Color` from four `u8` values (red, green, blue, alpha).
    #[inline]
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates a new opaque `Color` from three `u8` values.
    #[inline]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Converts each channel to `u8`, clamping out-of-range values.
    pub fn to_rgba_u8(self) -> [u8; 4] {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a),
        ]
    }

    /// Formats the color as an SVG paint value and its opacity.
    ///
    /// SVG 1.1 has no alpha channel in `rgb()`, so the alpha is returned
    /// separately for the matching `*-opacity` attribute.
    pub fn to_svg_paint(self) -> (String, f32) {
        let [r, g, b, _] = self.to_rgba_u8();
        (format!("#{r:02x}{g:02x}{b:02x}"), self.a.clamp(0.0, 1.0))
    }
}

/// Errors produced when parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string has a digit count other than 3, 6 or 8.
    #[error("expected 3, 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),
    /// The string contains a non-hex character.
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let mut digits = Vec::with_capacity(8);
        for c in hex.chars() {
            let digit = c.to_digit(16).ok_or(ColorParseError::InvalidDigit(c))?;
            digits.push(digit as u8);
        }
        let pair = |i: usize| digits[i] << 4 | digits[i + 1];
        match digits.len() {
            3 => Ok(Color::from_rgb_u8(
                digits[0] * 17,
                digits[1] * 17,
                digits[2] * 17,
            )),
            6 => Ok(Color::from_rgb_u8(pair(0), pair(2), pair(4))),
            8 => Ok(Color::from_rgba_u8(pair(0), pair(2), pair(4), pair(6))),
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }
}

/// Theme colors the ring falls back to when the caller supplies none.
pub struct Palette;

impl Palette {
    /// Foreground arc color.
    pub const GREEN_600: Color = Color::from_rgb_u8(0x16, 0xa3, 0x4a);
    /// Background disc color.
    pub const GREEN_400: Color = Color::from_rgb_u8(0x4a, 0xde, 0x80);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(
            "#16a34a".parse::<Color>(),
            Ok(Color::from_rgb_u8(0x16, 0xa3, 0x4a))
        );
        assert_eq!("fff".parse::<Color>(), Ok(Color::WHITE));
        assert_eq!(
            "#00000080".parse::<Color>(),
            Ok(Color::from_rgba_u8(0, 0, 0, 0x80))
        );
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(
            "#12345".parse::<Color>(),
            Err(ColorParseError::InvalidLength(5))
        );
        assert_eq!(
            "#12345g".parse::<Color>(),
            Err(ColorParseError::InvalidDigit('g'))
        );
        assert_eq!("".parse::<Color>(), Err(ColorParseError::InvalidLength(0)));
    }

    #[test]
    fn svg_paint_splits_alpha() {
        let (paint, opacity) = Palette::GREEN_400.to_svg_paint();
        assert_eq!(paint, "#4ade80");
        assert_eq!(opacity, 1.0);

        let (paint, opacity) = Color::new(1.0, 0.0, 0.0, 0.5).to_svg_paint();
        assert_eq!(paint, "#ff0000");
        assert_eq!(opacity, 0.5);
    }

    #[test]
    fn u8_round_trip_is_stable() {
        let color = Color::from_rgba_u8(1, 128, 254, 255);
        assert_eq!(color.to_rgba_u8(), [1, 128, 254, 255]);
    }
}
