//! Everything having to do with turning the color fields of a subtitle
//! script into canonical RGBA colors and back.
//!
//! A script declares colors in one of five encodings (see [`ColorFormat`]).
//! [`ColorCodec`] decodes any of them into a [`Color`], whose canonical text
//! form is eight lowercase hex digits in `rrggbbaa` order.
mod codec;
mod error;
mod format;
pub mod named;
mod rgba;

pub use self::codec::*;
pub use self::error::*;
pub use self::format::*;
pub use self::rgba::*;
