use super::error::{InvalidValueKind, ParseColorError};
use super::format::ColorFormat;
use super::named;
use super::rgba::Color;

/// How faithfully [`ColorCodec::convert`] reproduces historical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
    /// Always produce eight lowercase hex digits, rejecting hex values that
    /// are not exactly `&H` plus 6 or 8 digits.
    Canonical,
    /// Reproduce the output older subtitle tooling produced byte for byte.
    ///
    /// Hex formats pick single characters at fixed positions instead of
    /// digit pairs, and `magenta`/`cyan` carry a trailing space. The result
    /// is generally not a canonical color, so this mode only produces strings.
    ///
    /// Values are taken verbatim, whitespace included. Input that older
    /// tooling crashed on (hex values shorter than 6 or 8 characters,
    /// non-ASCII hex values) is an error here.
    Legacy,
}

impl Default for Compatibility {
    fn default() -> Compatibility {
        Compatibility::Canonical
    }
}

/// Converts raw subtitle color fields into canonical `rrggbbaa` colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCodec {
    #[serde(default)]
    pub compatibility: Compatibility,
}

/// Converts `value` declared with the format `token` using a canonical codec.
///
/// Returns `Ok(None)` for an unsupported token or an unknown color name.
pub fn convert(token: &str, value: &str) -> Result<Option<String>, ParseColorError> {
    ColorCodec::default().convert(ColorFormat::from_token(token), value)
}

impl ColorCodec {
    pub fn new(compatibility: Compatibility) -> ColorCodec {
        ColorCodec { compatibility }
    }

    pub fn legacy() -> ColorCodec {
        ColorCodec::new(Compatibility::Legacy)
    }

    /// Converts a raw field to its textual `rrggbbaa` form.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self), err, fields(self.compatibility = ?self.compatibility))
    )]
    pub fn convert(&self, format: ColorFormat, value: &str) -> Result<Option<String>, ParseColorError> {
        match self.compatibility {
            Compatibility::Canonical => Ok(decode(format, value)?.map(|c| c.to_string())),
            Compatibility::Legacy => legacy::convert(format, value),
        }
    }

    /// Decodes a raw field into a [`Color`].
    ///
    /// Decoding is always canonical: the legacy quirks cannot be expressed as
    /// a `Color`, so a legacy codec decodes exactly like a canonical one.
    pub fn decode(&self, format: ColorFormat, value: &str) -> Result<Option<Color>, ParseColorError> {
        decode(format, value)
    }

    /// Writes `color` in the given source encoding.
    ///
    /// Returns `None` for `Unsupported`, and for `Name` when no keyword has
    /// exactly this color.
    pub fn encode(&self, format: ColorFormat, color: &Color) -> Option<String> {
        let Color { r, g, b, a } = *color;
        Some(match format {
            ColorFormat::Name => named::name_of(color)?.to_owned(),
            ColorFormat::SsaHex => format!("&H{:02X}{:02X}{:02X}", b, g, r),
            ColorFormat::AssHex => format!("&H{:02X}{:02X}{:02X}{:02X}", a, b, g, r),
            ColorFormat::DecimalSsa => {
                (u32::from(b) << 16 | u32::from(g) << 8 | u32::from(r)).to_string()
            }
            ColorFormat::DecimalAss => u32::from_be_bytes([a, b, g, r]).to_string(),
            ColorFormat::Unsupported => return None,
        })
    }
}

fn decode(format: ColorFormat, value: &str) -> Result<Option<Color>, ParseColorError> {
    let invalid = |kind| ParseColorError::invalid(format, value, kind);
    let color = match format {
        ColorFormat::Name => named::lookup(value),
        ColorFormat::SsaHex => {
            let [b, g, r] = hex_digits::<3>(value).map_err(invalid)?;
            Some(Color::rgb(r, g, b))
        }
        ColorFormat::AssHex => {
            let [a, b, g, r] = hex_digits::<4>(value).map_err(invalid)?;
            Some(Color::rgba(r, g, b, a))
        }
        ColorFormat::DecimalSsa => {
            let packed = decimal(value, 0xFF_FFFF).map_err(invalid)?;
            let [_, b, g, r] = packed.to_be_bytes();
            Some(Color::rgb(r, g, b))
        }
        ColorFormat::DecimalAss => {
            let packed = decimal(value, 0xFFFF_FFFF).map_err(invalid)?;
            let [a, b, g, r] = packed.to_be_bytes();
            Some(Color::rgba(r, g, b, a))
        }
        ColorFormat::Unsupported => None,
    };
    if color.is_none() {
        #[cfg(feature = "tracing")]
        tracing::trace!(%format, value, "color left unset");
    }
    Ok(color)
}

/// Splits `&H` plus exactly `2 * N` hex digits (and an optional trailing `&`)
/// into `N` bytes, most significant first. Surrounding whitespace is ignored.
fn hex_digits<const N: usize>(value: &str) -> Result<[u8; N], InvalidValueKind> {
    let value = value.trim();
    let digits = match value.get(..2) {
        Some(marker) if marker.eq_ignore_ascii_case("&H") => &value[2..],
        _ => return Err(InvalidValueKind::MissingMarker),
    };
    let digits = digits.strip_suffix('&').unwrap_or(digits);
    if !digits.is_ascii() {
        return Err(InvalidValueKind::NotAscii);
    }
    if digits.len() != 2 * N {
        return Err(InvalidValueKind::BadLength {
            expected: 2 * N,
            actual: digits.len(),
        });
    }
    // from_str_radix alone would let a sign through
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(InvalidValueKind::NotHex);
    }
    let mut bytes = [0; N];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&digits[2 * i..2 * i + 2], 16)
            .map_err(|_| InvalidValueKind::NotHex)?;
    }
    Ok(bytes)
}

fn decimal(value: &str, max: u32) -> Result<u32, InvalidValueKind> {
    let n: i64 = value.trim().parse().map_err(InvalidValueKind::NotANumber)?;
    if n < 0 || n > i64::from(max) {
        return Err(InvalidValueKind::OutOfRange);
    }
    Ok(n as u32)
}

/// Byte-for-byte reproduction of historical converter output.
mod legacy {
    use super::super::error::{InvalidValueKind, ParseColorError};
    use super::super::format::ColorFormat;
    use super::super::named;

    pub(super) fn convert(format: ColorFormat, value: &str) -> Result<Option<String>, ParseColorError> {
        let invalid = |kind| ParseColorError::invalid(format, value, kind);
        Ok(Some(match format {
            ColorFormat::Name => match named::lookup(value) {
                Some(color) if named::SPACE_PADDED.iter().any(|&n| n == value) => format!("{} ", color),
                Some(color) => color.to_string(),
                None => return Ok(None),
            },
            ColorFormat::SsaHex => {
                let s = positional(value, 6).map_err(invalid)?;
                format!("{}{}{}ff", &s[6..], &s[4..5], &s[2..3])
            }
            ColorFormat::AssHex => {
                let s = positional(value, 8).map_err(invalid)?;
                format!("{}{}{}{}", &s[8..], &s[6..7], &s[4..5], &s[2..3])
            }
            ColorFormat::DecimalSsa => {
                let n: i32 = value.parse().map_err(|e| invalid(InvalidValueKind::NotANumber(e)))?;
                let hex = format!("{:06x}", n as u32);
                format!("{}{}{}ff", &hex[4..], &hex[2..4], &hex[..2])
            }
            ColorFormat::DecimalAss => {
                let n: i64 = value.parse().map_err(|e| invalid(InvalidValueKind::NotANumber(e)))?;
                let hex = format!("{:08x}", n as u64);
                format!("{}{}{}{}", &hex[6..], &hex[4..6], &hex[2..4], &hex[..2])
            }
            ColorFormat::Unsupported => return Ok(None),
        }))
    }

    /// Checks that single-byte indexing up to `min_len` is in bounds.
    fn positional(value: &str, min_len: usize) -> Result<&str, InvalidValueKind> {
        if !value.is_ascii() {
            return Err(InvalidValueKind::NotAscii);
        }
        if value.len() < min_len {
            return Err(InvalidValueKind::BadLength {
                expected: min_len,
                actual: value.len(),
            });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn canonical(format: ColorFormat, value: &str) -> Option<String> {
        ColorCodec::default().convert(format, value).unwrap()
    }

    fn legacy(format: ColorFormat, value: &str) -> Option<String> {
        ColorCodec::legacy().convert(format, value).unwrap()
    }

    fn invalid_kind(codec: ColorCodec, format: ColorFormat, value: &str) -> InvalidValueKind {
        match codec.convert(format, value) {
            Err(ParseColorError::InvalidColorValue { kind, format: f, value: v }) => {
                assert_eq!(f, format);
                assert_eq!(v, value);
                kind
            }
            other => panic!("{} {:?} converted to {:?}", format, value, other),
        }
    }

    #[test]
    fn every_keyword_converts() {
        let expected = [
            ("transparent", "00000000"),
            ("black", "000000ff"),
            ("silver", "c0c0c0ff"),
            ("gray", "808080ff"),
            ("white", "ffffffff"),
            ("maroon", "800000ff"),
            ("red", "ff0000ff"),
            ("purple", "800080ff"),
            ("fuchsia", "ff00ffff"),
            ("magenta", "ff00ffff"),
            ("green", "008000ff"),
            ("lime", "00ff00ff"),
            ("olive", "808000ff"),
            ("yellow", "ffff00ff"),
            ("navy", "000080ff"),
            ("blue", "0000ffff"),
            ("teal", "008080ff"),
            ("aqua", "00ffffff"),
            ("cyan", "00ffffff"),
        ];
        for &(name, hex) in expected.iter() {
            assert_eq!(canonical(ColorFormat::Name, name).as_deref(), Some(hex), "{}", name);
        }
        assert_eq!(canonical(ColorFormat::Name, "Red"), None);
        assert_eq!(canonical(ColorFormat::Name, "orange"), None);
    }

    #[test]
    fn legacy_keywords_keep_trailing_space() {
        assert_eq!(legacy(ColorFormat::Name, "magenta").as_deref(), Some("ff00ffff "));
        assert_eq!(legacy(ColorFormat::Name, "cyan").as_deref(), Some("00ffffff "));
        assert_eq!(legacy(ColorFormat::Name, "fuchsia").as_deref(), Some("ff00ffff"));
        assert_eq!(legacy(ColorFormat::Name, "transparent").as_deref(), Some("00000000"));
        assert_eq!(legacy(ColorFormat::Name, "orange"), None);
    }

    #[test]
    fn ssa_hex() {
        assert_eq!(canonical(ColorFormat::SsaHex, "&H0080FF").as_deref(), Some("ff8000ff"));
        assert_eq!(canonical(ColorFormat::SsaHex, "&h0080ff&").as_deref(), Some("ff8000ff"));
        // red is everything from index 6, green and blue one character each
        assert_eq!(legacy(ColorFormat::SsaHex, "&H0080FF").as_deref(), Some("FF80ff"));
        assert_eq!(legacy(ColorFormat::SsaHex, "&H123456").as_deref(), Some("5631ff"));
    }

    #[test]
    fn ass_hex() {
        assert_eq!(canonical(ColorFormat::AssHex, "&H00FF8040").as_deref(), Some("4080ff00"));
        assert_eq!(canonical(ColorFormat::AssHex, "&H80000000&").as_deref(), Some("00000080"));
        assert_eq!(legacy(ColorFormat::AssHex, "&H00FF8040").as_deref(), Some("408F0"));
        assert_eq!(legacy(ColorFormat::AssHex, "&H12345678").as_deref(), Some("78531"));
    }

    #[test]
    fn malformed_hex() {
        let codec = ColorCodec::default();
        assert_eq!(invalid_kind(codec, ColorFormat::SsaHex, "0080FF"), InvalidValueKind::MissingMarker);
        assert_eq!(invalid_kind(codec, ColorFormat::SsaHex, ""), InvalidValueKind::MissingMarker);
        assert_eq!(
            invalid_kind(codec, ColorFormat::SsaHex, "&H80FF"),
            InvalidValueKind::BadLength { expected: 6, actual: 4 }
        );
        assert_eq!(
            invalid_kind(codec, ColorFormat::AssHex, "&H0080FF"),
            InvalidValueKind::BadLength { expected: 8, actual: 6 }
        );
        assert_eq!(invalid_kind(codec, ColorFormat::AssHex, "&H00GG80FF"), InvalidValueKind::NotHex);
        assert_eq!(invalid_kind(codec, ColorFormat::SsaHex, "&H+F80FF"), InvalidValueKind::NotHex);
        assert_eq!(invalid_kind(codec, ColorFormat::SsaHex, "&H00é0F"), InvalidValueKind::NotAscii);
    }

    #[test]
    fn short_legacy_hex_is_an_error() {
        let codec = ColorCodec::legacy();
        assert_eq!(
            invalid_kind(codec, ColorFormat::SsaHex, "&H00F"),
            InvalidValueKind::BadLength { expected: 6, actual: 5 }
        );
        assert_eq!(
            invalid_kind(codec, ColorFormat::AssHex, "&H00FF8"),
            InvalidValueKind::BadLength { expected: 8, actual: 7 }
        );
        assert_eq!(invalid_kind(codec, ColorFormat::AssHex, "&H00é0FF80"), InvalidValueKind::NotAscii);
    }

    #[test]
    fn legacy_hex_without_red_digits() {
        // the red tail is simply empty, as older tooling printed it
        assert_eq!(legacy(ColorFormat::SsaHex, "&H00FF").as_deref(), Some("F0ff"));
        assert_eq!(legacy(ColorFormat::AssHex, "&H00FF80").as_deref(), Some("8F0"));
    }

    #[test]
    fn legacy_takes_values_verbatim() {
        assert_eq!(legacy(ColorFormat::SsaHex, " &H0080FF").as_deref(), Some("0FF0Hff"));
        match invalid_kind(ColorCodec::legacy(), ColorFormat::DecimalSsa, " 255") {
            InvalidValueKind::NotANumber(_) => {}
            kind => panic!("unexpected {:?}", kind),
        }
    }

    #[test]
    fn canonical_ignores_surrounding_whitespace() {
        assert_eq!(canonical(ColorFormat::SsaHex, " &H0080FF ").as_deref(), Some("ff8000ff"));
        assert_eq!(canonical(ColorFormat::AssHex, "\t&h00ff8040&").as_deref(), Some("4080ff00"));
        assert_eq!(canonical(ColorFormat::DecimalAss, " 4278190335\n").as_deref(), Some("ff0000ff"));
    }

    #[test]
    fn decimal_ssa() {
        assert_eq!(canonical(ColorFormat::DecimalSsa, "16711680").as_deref(), Some("0000ffff"));
        assert_eq!(canonical(ColorFormat::DecimalSsa, "255").as_deref(), Some("ff0000ff"));
        assert_eq!(canonical(ColorFormat::DecimalSsa, "0").as_deref(), Some("000000ff"));
        assert_eq!(legacy(ColorFormat::DecimalSsa, "16711680").as_deref(), Some("0000ffff"));
        assert_eq!(legacy(ColorFormat::DecimalSsa, "255").as_deref(), Some("ff0000ff"));
    }

    #[test]
    fn decimal_ass() {
        assert_eq!(canonical(ColorFormat::DecimalAss, "4278190335").as_deref(), Some("ff0000ff"));
        assert_eq!(canonical(ColorFormat::DecimalAss, "65280").as_deref(), Some("00ff0000"));
        assert_eq!(legacy(ColorFormat::DecimalAss, "4278190335").as_deref(), Some("ff0000ff"));
        assert_eq!(legacy(ColorFormat::DecimalAss, "65280").as_deref(), Some("00ff0000"));
    }

    #[test]
    fn decimal_out_of_range() {
        let codec = ColorCodec::default();
        assert_eq!(invalid_kind(codec, ColorFormat::DecimalSsa, "16777216"), InvalidValueKind::OutOfRange);
        assert_eq!(invalid_kind(codec, ColorFormat::DecimalSsa, "-1"), InvalidValueKind::OutOfRange);
        assert_eq!(invalid_kind(codec, ColorFormat::DecimalAss, "4294967296"), InvalidValueKind::OutOfRange);
        // two's complement, as older tooling printed negative values
        assert_eq!(legacy(ColorFormat::DecimalSsa, "-1").as_deref(), Some("ffffffffff"));
    }

    #[test]
    fn non_numeric_decimal() {
        for &format in &[ColorFormat::DecimalSsa, ColorFormat::DecimalAss] {
            for &codec in &[ColorCodec::default(), ColorCodec::legacy()] {
                match invalid_kind(codec, format, "not-a-number") {
                    InvalidValueKind::NotANumber(_) => {}
                    kind => panic!("unexpected {:?}", kind),
                }
            }
        }
    }

    #[test]
    fn unsupported_format_is_unset() {
        assert_eq!(canonical(ColorFormat::Unsupported, "anything"), None);
        assert_eq!(legacy(ColorFormat::Unsupported, "anything"), None);
        assert_eq!(convert("unknown-format", "anything").unwrap(), None);
    }

    #[test]
    fn free_convert_matches_tokens() {
        assert_eq!(convert("NAME", "navy").unwrap().as_deref(), Some("000080ff"));
        assert_eq!(convert("&hbbggrr", "&H0080FF").unwrap().as_deref(), Some("ff8000ff"));
        assert_eq!(convert("decimalcodedbbggrr", "16711680").unwrap().as_deref(), Some("0000ffff"));
        assert!(convert("decimalCodedBBGGRR", "not-a-number").is_err());
    }

    #[test]
    fn encode_restores_source_encoding() {
        let codec = ColorCodec::default();
        for &(format, raw) in &[
            (ColorFormat::Name, "teal"),
            (ColorFormat::SsaHex, "&H0080FF"),
            (ColorFormat::AssHex, "&H7F102030"),
            (ColorFormat::DecimalSsa, "16711680"),
            (ColorFormat::DecimalAss, "4278190335"),
        ] {
            let color = codec.decode(format, raw).unwrap().unwrap();
            assert_eq!(codec.encode(format, &color).as_deref(), Some(raw));
        }
    }

    #[test]
    fn encode_without_a_representation() {
        let codec = ColorCodec::default();
        assert_eq!(codec.encode(ColorFormat::Name, &Color::rgb(1, 2, 3)), None);
        assert_eq!(codec.encode(ColorFormat::Unsupported, &Color::WHITE), None);
        assert_eq!(codec.encode(ColorFormat::Name, &Color::rgb(0xFF, 0, 0xFF)).as_deref(), Some("fuchsia"));
    }

    #[test]
    fn legacy_decodes_canonically() {
        let color = ColorCodec::legacy().decode(ColorFormat::SsaHex, "&H0080FF").unwrap();
        assert_eq!(color, Some(Color::rgb(0xFF, 0x80, 0x00)));
    }

    #[test]
    fn compatibility_deserializes_from_settings() {
        let codec: ColorCodec = serde_json::from_str(r#"{"compatibility": "legacy"}"#).unwrap();
        assert_eq!(codec, ColorCodec::legacy());
        let codec: ColorCodec = serde_json::from_str("{}").unwrap();
        assert_eq!(codec, ColorCodec::default());
    }
}
