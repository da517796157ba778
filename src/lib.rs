//! Subtitle style records and color conversion for the ASS/SSA family of
//! subtitle formats.
//!
//! The two halves of this crate are [`style`], which holds a named rendering
//! style the way a `Style:` line declares it, and [`color`], which turns the
//! several color encodings those files use into one canonical RGBA value.
//!
//! ```
//! use subtitle_style::color::{ColorCodec, ColorFormat};
//! use subtitle_style::style::Style;
//!
//! let codec = ColorCodec::default();
//! let mut style = Style::new("Default");
//! style.set_color(&codec, ColorFormat::AssHex, "&H00FFFFFF").unwrap();
//! assert_eq!(style.color.unwrap().to_string(), "ffffff00");
//! ```
//!
//! Parsing whole subtitle files is left to the caller: it decides which
//! [`ColorFormat`](color::ColorFormat) applies to a field (see
//! [`ColorFormat::for_field`](color::ColorFormat::for_field)) and feeds the raw
//! value through a [`ColorCodec`](color::ColorCodec).
#![doc(html_root_url = "https://docs.rs/subtitle-style/0.1.0")]

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate serde_derive;

pub mod color;
pub mod style;

pub use crate::color::{convert, ParseColorError};
