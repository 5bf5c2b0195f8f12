//! Provides a small RGB colour type for icon tiles and the desktop background.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// An error that can occur when parsing a string into an `IconColor`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseIconColorError {
    /// The string has neither 3 nor 6 hex digits (e.g., "#12345").
    #[error("expected 3 or 6 hex digits, found {0}")]
    InvalidLength(usize),
    /// The string contains something other than hex digits (e.g., "#12345g").
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// An opaque RGB colour, displayed in CSS hex notation (`#rrggbb`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconColor {
    r: u8,
    g: u8,
    b: u8,
}

impl IconColor {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the `(r, g, b)` components.
    pub fn components(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for IconColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses `#rgb` or `#rrggbb`, case-insensitive. The leading `#` is optional.
///
/// # Examples
/// ```
/// use api::icon_color::IconColor;
///
/// let color: IconColor = "#4cc9f0".parse().unwrap();
/// assert_eq!(color, IconColor::rgb(0x4c, 0xc9, 0xf0));
///
/// let short: IconColor = "fff".parse().unwrap();
/// assert_eq!(short, IconColor::WHITE);
/// ```
impl FromStr for IconColor {
    type Err = ParseIconColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());

        let nibbles = digits
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseIconColorError::InvalidDigit(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match nibbles.as_slice() {
            // "#abc" is shorthand for "#aabbcc"
            [r, g, b] => Ok(Self::rgb(r * 17, g * 17, b * 17)),
            [r1, r2, g1, g2, b1, b2] => Ok(Self::rgb(
                r1 << 4 | r2,
                g1 << 4 | g2,
                b1 << 4 | b2,
            )),
            other => Err(ParseIconColorError::InvalidLength(other.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_form() {
        assert_eq!("#ff6b6b".parse(), Ok(IconColor::rgb(0xff, 0x6b, 0x6b)));
        assert_eq!("7B68EE".parse(), Ok(IconColor::rgb(0x7b, 0x68, 0xee)));
    }

    #[test]
    fn parses_short_form() {
        assert_eq!("#fff".parse(), Ok(IconColor::WHITE));
        assert_eq!("#1a3".parse(), Ok(IconColor::rgb(0x11, 0xaa, 0x33)));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            "#12345".parse::<IconColor>(),
            Err(ParseIconColorError::InvalidLength(5))
        );
        assert_eq!(
            "".parse::<IconColor>(),
            Err(ParseIconColorError::InvalidLength(0))
        );
        assert_eq!(
            "#12345g".parse::<IconColor>(),
            Err(ParseIconColorError::InvalidDigit('g'))
        );
    }

    #[test]
    fn displays_as_css_hex() {
        assert_eq!(IconColor::rgb(0x4c, 0xc9, 0xf0).to_string(), "#4cc9f0");
        assert_eq!(IconColor::rgb(0, 1, 2).to_string(), "#000102");
    }
}
