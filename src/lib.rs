//! favemoji - Emoji favicon generator
//!
//! A library for rendering an emoji character into a multi-resolution
//! favicon (`.ico`) and a matching PNG image.

pub mod cli;
pub mod emoji;
pub mod error;
pub mod output;
pub mod render;

pub use emoji::resolve;
pub use error::{FavemojiError, Result};
pub use render::{encode_ico, render_glyph, resize_set, write_ico, write_png, BASE_SIZE, ICO_SIZES};
