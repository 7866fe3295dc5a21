//! Rendering module for favemoji.
//!
//! This module handles turning a resolved emoji glyph into bitmaps and
//! packaging them as PNG and ICO artifacts.

mod favicon;
mod glyph;
mod png;

pub use favicon::{encode_ico, resize_set, write_ico, ICO_SIZES};
pub use glyph::{render_glyph, BASE_SIZE};
pub use png::write_png;
