//! The W3C color keywords understood by the `name` format.
use std::collections::HashMap;

use super::rgba::Color;

/// Keywords in lookup order. Aliases come after the keyword they duplicate, so
/// reverse lookups prefer `fuchsia` over `magenta` and `aqua` over `cyan`.
pub(crate) static KEYWORDS: [(&str, Color); 19] = [
    ("transparent", Color::TRANSPARENT),
    ("black", Color::BLACK),
    ("silver", Color::rgb(0xC0, 0xC0, 0xC0)),
    ("gray", Color::rgb(0x80, 0x80, 0x80)),
    ("white", Color::WHITE),
    ("maroon", Color::rgb(0x80, 0x00, 0x00)),
    ("red", Color::rgb(0xFF, 0x00, 0x00)),
    ("purple", Color::rgb(0x80, 0x00, 0x80)),
    ("fuchsia", Color::rgb(0xFF, 0x00, 0xFF)),
    ("magenta", Color::rgb(0xFF, 0x00, 0xFF)),
    ("green", Color::rgb(0x00, 0x80, 0x00)),
    ("lime", Color::rgb(0x00, 0xFF, 0x00)),
    ("olive", Color::rgb(0x80, 0x80, 0x00)),
    ("yellow", Color::rgb(0xFF, 0xFF, 0x00)),
    ("navy", Color::rgb(0x00, 0x00, 0x80)),
    ("blue", Color::rgb(0x00, 0x00, 0xFF)),
    ("teal", Color::rgb(0x00, 0x80, 0x80)),
    ("aqua", Color::rgb(0x00, 0xFF, 0xFF)),
    ("cyan", Color::rgb(0x00, 0xFF, 0xFF)),
];

/// Aliases that older consumers received with a trailing space after the
/// alpha byte.
pub(crate) const SPACE_PADDED: [&str; 2] = ["magenta", "cyan"];

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, Color> = KEYWORDS.iter().copied().collect();
}

/// Case-sensitive keyword lookup.
pub fn lookup(name: &str) -> Option<Color> {
    BY_NAME.get(name).copied()
}

/// The first keyword naming `color`, if any.
pub fn name_of(color: &Color) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .find(|(_, c)| c == color)
        .map(|&(name, _)| name)
}
