use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// The encoding a subtitle file declares for one of its color fields.
///
/// Tokens are matched case-insensitively with [`ColorFormat::from_token`].
/// Anything unrecognised becomes [`ColorFormat::Unsupported`], which converts
/// to "no color" rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorFormat {
    /// W3C color keyword, e.g. `teal`
    Name,
    /// SSA hex, `&HBBGGRR`
    SsaHex,
    /// ASS hex, `&HAABBGGRR`
    AssHex,
    /// SSA decimal integer packing `BBGGRR`
    DecimalSsa,
    /// ASS decimal integer packing `AABBGGRR`
    DecimalAss,
    Unsupported,
}

impl ColorFormat {
    /// All formats that actually convert, in token order.
    pub const SUPPORTED: [ColorFormat; 5] = [
        ColorFormat::Name,
        ColorFormat::SsaHex,
        ColorFormat::AssHex,
        ColorFormat::DecimalSsa,
        ColorFormat::DecimalAss,
    ];

    pub fn from_token(token: &str) -> ColorFormat {
        ColorFormat::SUPPORTED
            .iter()
            .copied()
            .find(|format| format.token().eq_ignore_ascii_case(token))
            .unwrap_or(ColorFormat::Unsupported)
    }

    /// The declaration token of this format, `""` for `Unsupported`.
    pub fn token(self) -> &'static str {
        match self {
            ColorFormat::Name => "name",
            ColorFormat::SsaHex => "&HBBGGRR",
            ColorFormat::AssHex => "&HAABBGGRR",
            ColorFormat::DecimalSsa => "decimalCodedBBGGRR",
            ColorFormat::DecimalAss => "decimalCodedAABBGGRR",
            ColorFormat::Unsupported => "",
        }
    }

    /// Picks the format of a raw `Style:` color field.
    ///
    /// Both dialects allow either a `&H` hex literal (marker in any case) or a
    /// plain decimal integer; which byte layout applies depends on the
    /// dialect. Surrounding whitespace is ignored, as it is when decoding.
    pub fn for_field(script: ScriptType, raw: &str) -> ColorFormat {
        let hex = raw
            .trim()
            .get(..2)
            .map_or(false, |marker| marker.eq_ignore_ascii_case("&H"));
        match (script, hex) {
            (ScriptType::Ssa, true) => ColorFormat::SsaHex,
            (ScriptType::Ssa, false) => ColorFormat::DecimalSsa,
            (ScriptType::Ass, true) => ColorFormat::AssHex,
            (ScriptType::Ass, false) => ColorFormat::DecimalAss,
        }
    }
}

impl<'a> From<&'a str> for ColorFormat {
    fn from(token: &'a str) -> ColorFormat {
        ColorFormat::from_token(token)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFormat::Unsupported => f.write_str("unsupported"),
            format => f.write_str(format.token()),
        }
    }
}

/// The dialect of a subtitle script, from its `ScriptType:` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptType {
    /// SubStation Alpha, `v4.00`
    Ssa,
    /// Advanced SubStation Alpha, `v4.00+`
    Ass,
}

impl FromStr for ScriptType {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<ScriptType, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "v4.00" => ScriptType::Ssa,
            "v4.00+" => ScriptType::Ass,
            _ => return Err(ParseColorError::UnknownScriptType(s.to_owned())),
        })
    }
}
