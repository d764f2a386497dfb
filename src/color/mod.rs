//! # Color Module
//!
//! An RGBA color stored as four 8-bit channels.
//!
//! The toolkit only blends channels linearly; it carries no notion of gamma or
//! color space. Three-channel colors are simply colors with an opaque alpha.

use crate::config::CHANNEL_MAX;
use crate::{ToolkitError, ToolkitResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A color made of red, green, blue and alpha bytes.
///
/// # Examples
///
/// ```
/// use nolat_toolkit::Color;
///
/// let orange = Color::rgb(255, 128, 0);
/// assert_eq!(orange.alpha(), 255);
/// assert_eq!(orange.to_string(), "#ff8000");
///
/// let parsed: Color = "#ff800080".parse().unwrap();
/// assert_eq!(parsed, Color::rgba(255, 128, 0, 128));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Creates an opaque color from three channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: CHANNEL_MAX }
    }

    /// Creates a color from four channels.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn red(self) -> u8 {
        self.r
    }

    #[inline]
    pub fn green(self) -> u8 {
        self.g
    }

    #[inline]
    pub fn blue(self) -> u8 {
        self.b
    }

    #[inline]
    pub fn alpha(self) -> u8 {
        self.a
    }

    /// True when the alpha channel is at its maximum.
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == CHANNEL_MAX
    }

    /// Channels in `[r, g, b, a]` order.
    #[inline]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parses `RRGGBB` or `RRGGBBAA` hex notation, with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::InvalidColor`] for any other length or for
    /// non-hexadecimal digits.
    pub fn from_hex(text: &str) -> ToolkitResult<Self> {
        let digits = text.trim().trim_start_matches('#');

        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(ToolkitError::InvalidColor(format!(
                "expected RRGGBB or RRGGBBAA, got '{}'",
                text
            )));
        }

        // from_str_radix tolerates a leading '+', so check the digits up front
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ToolkitError::InvalidColor(format!(
                "'{}' contains non-hex digits",
                text
            )));
        }

        let channel = |index: usize| -> ToolkitResult<u8> {
            let pair = &digits[index * 2..index * 2 + 2];
            u8::from_str_radix(pair, 16).map_err(|_| {
                ToolkitError::InvalidColor(format!("'{}' is not a hex byte in '{}'", pair, text))
            })
        };

        let r = channel(0)?;
        let g = channel(1)?;
        let b = channel(2)?;
        let a = if digits.len() == 8 { channel(3)? } else { CHANNEL_MAX };

        Ok(Self::rgba(r, g, b, a))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl FromStr for Color {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_is_opaque() {
        let c = Color::rgb(10, 20, 30);
        assert_eq!(c.red(), 10);
        assert_eq!(c.green(), 20);
        assert_eq!(c.blue(), 30);
        assert_eq!(c.alpha(), 255);
        assert!(c.is_opaque());
    }

    #[test]
    fn test_rgba_keeps_alpha() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(c.to_array(), [1, 2, 3, 4]);
        assert!(!c.is_opaque());
        assert_eq!(Color::from([1, 2, 3, 4]), c);
        assert_eq!(Color::from([1, 2, 3]), Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::RED, Color::rgba(255, 0, 0, 255));
        assert_eq!(Color::GREEN, Color::rgb(0, 255, 0));
        assert_eq!(Color::BLUE, Color::rgb(0, 0, 255));
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::TRANSPARENT.alpha(), 0);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff0000").unwrap(), Color::RED);
        assert_eq!(Color::from_hex("00FF00").unwrap(), Color::GREEN);
        assert_eq!(
            Color::from_hex(" #0000ff80 ").unwrap(),
            Color::rgba(0, 0, 255, 128)
        );
    }

    #[test]
    fn test_from_hex_rejects_malformed_input() {
        for bad in ["", "#", "#fff", "#12345", "#1234567", "#gg0000", "#12345é"] {
            match Color::from_hex(bad) {
                Err(ToolkitError::InvalidColor(_)) => {}
                other => panic!("expected InvalidColor for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for color in [Color::RED, Color::rgba(18, 52, 86, 120), Color::TRANSPARENT] {
            let parsed: Color = color.to_string().parse().unwrap();
            assert_eq!(parsed, color);
        }
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "#010203");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }
}
