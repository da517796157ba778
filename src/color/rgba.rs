use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// RGBA colour in the canonical form every decoded subtitle color ends up in.
///
/// The components are stored exactly as the source encoding declared them. In
/// particular the alpha byte of an ASS color is *not* inverted: ASS uses `00`
/// for opaque, and that is what you get back.
///
/// Formatting with `{}` yields the canonical eight lowercase hex digits in
/// `rrggbbaa` order, which is also the serde representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
    /// Alpha component
    pub a: u8,
}

impl Color {
    /// Fully transparent black (`00000000`)
    pub const TRANSPARENT: Color = Color::rgba(0x00, 0x00, 0x00, 0x00);

    /// Black color (`000000ff`)
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// White color (`ffffffff`)
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    /// An opaque color, alpha forced to `ff`.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Parses the canonical `rrggbbaa` form back. Upper-case digits are accepted,
/// anything that is not exactly eight hex digits is not.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Color, Self::Err> {
        let incorrect = || ParseColorError::IncorrectColor(s.to_owned());
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(incorrect());
        }
        let byte = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| incorrect());
        Ok(Color {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            a: byte(6)?,
        })
    }
}

impl From<Color> for String {
    fn from(color: Color) -> String {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(s: String) -> Result<Color, Self::Error> {
        s.parse()
    }
}
