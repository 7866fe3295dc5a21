//! Glyph rasterization.
//!
//! Renders a single emoji character into a square RGBA bitmap by looking up
//! its Twemoji SVG asset and rasterizing it with resvg. No system fonts are
//! involved, so output is deterministic for a given glyph and size.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use twemoji_assets::svg::SvgTwemojiAsset;

use crate::error::{FavemojiError, Result};

/// Edge length of the base bitmap every other size is derived from.
pub const BASE_SIZE: u32 = 256;

/// Rasterize `glyph` onto a transparent `size`x`size` canvas.
///
/// The glyph is scaled to fill the canvas and centred on it. Fails with a
/// render error when the glyph has no SVG asset coverage or the asset
/// cannot be parsed.
pub fn render_glyph(glyph: &str, size: u32) -> Result<RgbaImage> {
    let svg = glyph_svg(glyph)?;

    let opts = Options::default();
    let tree = Tree::from_str(svg, &opts).map_err(|e| FavemojiError::Render {
        message: format!("failed to parse glyph SVG: {}", e),
    })?;

    let mut pixmap = Pixmap::new(size, size).ok_or_else(|| FavemojiError::Render {
        message: format!("cannot allocate a {}x{} canvas", size, size),
    })?;

    // Scale to fill the canvas, then centre the shorter axis.
    let svg_size = tree.size();
    let scale = size as f32 / svg_size.width().max(svg_size.height());
    let tx = (size as f32 - svg_size.width() * scale) / 2.0;
    let ty = (size as f32 - svg_size.height() * scale) / 2.0;
    let transform = Transform::from_scale(scale, scale).post_translate(tx, ty);

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap_to_image(&pixmap))
}

/// Look up the Twemoji SVG for a glyph.
fn glyph_svg(glyph: &str) -> Result<&'static str> {
    let asset: &'static SvgTwemojiAsset =
        SvgTwemojiAsset::from_emoji(glyph).ok_or_else(|| FavemojiError::Render {
            message: format!("no glyph coverage for \"{}\"", glyph),
        })?;
    Ok(asset.as_ref())
}

/// Convert a tiny-skia pixmap into an RGBA image.
///
/// tiny-skia stores premultiplied alpha; image expects straight alpha.
fn pixmap_to_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    for y in 0..pixmap.height() {
        for x in 0..pixmap.width() {
            let Some(pixel) = pixmap.pixel(x, y) else {
                continue;
            };
            let c = pixel.demultiply();
            img.put_pixel(x, y, Rgba([c.red(), c.green(), c.blue(), c.alpha()]));
        }
    }

    img
}
