use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Shift each channel by a signed amount, clamping to 0-255.
    pub fn offset(self, dr: i16, dg: i16, db: i16) -> Self {
        let shift = |c: u8, d: i16| -> u8 { (c as i16).saturating_add(d).clamp(0, 255) as u8 };
        Self {
            r: shift(self.r, dr),
            g: shift(self.g, dg),
            b: shift(self.b, db),
        }
    }
}

/// An opaque sRGB color. Always renders as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(Rgb);

impl Color {
    pub const WHITE: Color = Color(Rgb::new(255, 255, 255));
    pub const BLACK: Color = Color(Rgb::new(0, 0, 0));

    pub const fn from_rgb(rgb: Rgb) -> Self {
        Color(rgb)
    }

    pub const fn rgb(self) -> Rgb {
        self.0
    }

    pub fn to_hex(self) -> String {
        to_hex(self.0)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color(rgb)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_rgb(s).map(Color)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Parse `#rrggbb` (any case) or the `#rgb` shorthand into channels.
/// Surrounding whitespace is ignored; anything else is `InvalidColorFormat`.
pub fn to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let trimmed = hex.trim();
    let raw = trimmed
        .strip_prefix('#')
        .ok_or_else(|| ColorError::invalid(hex))?;

    // from_str_radix tolerates a leading '+', so validate digits up front
    if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::invalid(hex));
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| ColorError::invalid(hex));

    match raw.len() {
        6 => Ok(Rgb {
            r: channel(&raw[0..2])?,
            g: channel(&raw[2..4])?,
            b: channel(&raw[4..6])?,
        }),
        3 => {
            // #abc -> #aabbcc
            let expand = |i: usize| channel(&raw[i..i + 1]).map(|v| v * 17);
            Ok(Rgb {
                r: expand(0)?,
                g: expand(1)?,
                b: expand(2)?,
            })
        }
        _ => Err(ColorError::invalid(hex)),
    }
}

/// Encode channels as lowercase, zero-padded `#rrggbb`.
pub fn to_hex(rgb: Rgb) -> String {
    Color(rgb).to_string()
}

/// Sanitize user input into the canonical `#rrggbb` form.
pub fn normalize_hex(input: &str) -> Result<String, ColorError> {
    to_rgb(input).map(to_hex)
}
