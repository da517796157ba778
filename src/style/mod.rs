//! Named rendering styles, as declared by the `Style:` lines of a script.
mod id;
mod set;

pub use self::id::StyleIdGenerator;
pub use self::set::StyleSet;

use crate::color::{Color, ColorCodec, ColorFormat, ParseColorError};

/// One named rendering style.
///
/// Fields are public: the parser that reads a script fills them in directly.
/// Colors can only hold canonical values, so use [`Style::set_color`] and
/// [`Style::set_background_color`] to store a raw field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Identifier of the style within its document.
    pub id: String,
    /// Font family name.
    pub font: Option<String>,
    /// Font size, exactly as the source wrote it.
    pub font_size: Option<String>,
    /// Foreground color.
    pub color: Option<Color>,
    /// Background/outline color.
    pub background_color: Option<Color>,
    /// Empty means unset, inherit from the renderer.
    pub text_align: String,
    pub italic: bool,
    pub bold: bool,
    pub underline: bool,
}

bitflags! {
    /// The emphasis flags of a style viewed together
    pub struct FontStyle: u8 {
        const BOLD = 1;
        const UNDERLINE = 2;
        const ITALIC = 4;
    }
}

impl Default for FontStyle {
    fn default() -> FontStyle {
        FontStyle::empty()
    }
}

impl Style {
    /// A style with the given identifier and nothing else set.
    pub fn new<S: Into<String>>(style_name: S) -> Style {
        Style {
            id: style_name.into(),
            ..Style::default()
        }
    }

    /// A copy of `base` under a new identifier, for styles that extend
    /// another one.
    pub fn copy<S: Into<String>>(new_name: S, base: &Style) -> Style {
        Style {
            id: new_name.into(),
            ..base.clone()
        }
    }

    /// Converts `raw` and stores it as the foreground color.
    ///
    /// An unsupported format or unknown color name clears the color. On error
    /// the current color is kept.
    pub fn set_color(
        &mut self,
        codec: &ColorCodec,
        format: ColorFormat,
        raw: &str,
    ) -> Result<(), ParseColorError> {
        self.color = codec.decode(format, raw)?;
        Ok(())
    }

    /// Same as [`Style::set_color`], for the background color.
    pub fn set_background_color(
        &mut self,
        codec: &ColorCodec,
        format: ColorFormat,
        raw: &str,
    ) -> Result<(), ParseColorError> {
        self.background_color = codec.decode(format, raw)?;
        Ok(())
    }

    pub fn font_style(&self) -> FontStyle {
        let mut font_style = FontStyle::empty();
        font_style.set(FontStyle::BOLD, self.bold);
        font_style.set(FontStyle::UNDERLINE, self.underline);
        font_style.set(FontStyle::ITALIC, self.italic);
        font_style
    }

    pub fn set_font_style(&mut self, font_style: FontStyle) {
        self.bold = font_style.contains(FontStyle::BOLD);
        self.underline = font_style.contains(FontStyle::UNDERLINE);
        self.italic = font_style.contains(FontStyle::ITALIC);
    }
}
