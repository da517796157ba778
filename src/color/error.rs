use std::num::ParseIntError;

use super::format::ColorFormat;

/// An error converting a raw color field
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseColorError {
    /// The value does not fit the encoding its format token promised
    #[error("Invalid {format} color value {value:?}: {kind}")]
    InvalidColorValue {
        format: ColorFormat,
        value: String,
        #[source]
        kind: InvalidValueKind,
    },
    /// Not a canonical `rrggbbaa` color
    #[error("Incorrect color: {0:?}")]
    IncorrectColor(String),
    /// A `ScriptType:` header naming neither SSA nor ASS
    #[error("Unknown script type: {0:?}")]
    UnknownScriptType(String),
}

/// What exactly was wrong with an invalid color value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidValueKind {
    #[error("not a number")]
    NotANumber(#[source] ParseIntError),
    #[error("number out of range")]
    OutOfRange,
    #[error("missing &H marker")]
    MissingMarker,
    #[error("expected {expected} characters, found {actual}")]
    BadLength { expected: usize, actual: usize },
    #[error("not a hex digit")]
    NotHex,
    #[error("non-ASCII characters")]
    NotAscii,
}

impl ParseColorError {
    pub(crate) fn invalid(format: ColorFormat, value: &str, kind: InvalidValueKind) -> Self {
        ParseColorError::InvalidColorValue {
            format,
            value: value.to_owned(),
            kind,
        }
    }
}
