//! Favicon size derivation and ICO container assembly.
//!
//! The ICO container bundles the same artwork at several resolutions so
//! browsers and shells can pick the closest match.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::FilterType;
use image::RgbaImage;

use crate::error::{FavemojiError, Result};

/// Embedded resolutions, smallest first. This is also the entry order
/// inside the container.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Resize the base bitmap to every entry in [`ICO_SIZES`].
///
/// Each variant is derived from the base image directly rather than chained
/// from the previous size, so resampling artifacts do not accumulate.
pub fn resize_set(base: &RgbaImage) -> Vec<RgbaImage> {
    ICO_SIZES
        .iter()
        .map(|&size| image::imageops::resize(base, size, size, FilterType::Lanczos3))
        .collect()
}

/// Encode bitmaps into an in-memory ICO directory, preserving order.
pub fn encode_ico(images: &[RgbaImage]) -> Result<IconDir> {
    let mut dir = IconDir::new(ResourceType::Icon);

    for img in images {
        let icon = IconImage::from_rgba_data(img.width(), img.height(), img.as_raw().clone());
        let entry = IconDirEntry::encode(&icon).map_err(|e| FavemojiError::Encode {
            message: format!(
                "failed to encode {}x{} entry: {}",
                img.width(),
                img.height(),
                e
            ),
        })?;
        dir.add_entry(entry);
    }

    Ok(dir)
}

/// Encode bitmaps and write the ICO container to `path`.
pub fn write_ico(images: &[RgbaImage], path: &Path) -> Result<()> {
    let dir = encode_ico(images)?;

    let file = File::create(path).map_err(|e| FavemojiError::Io {
        path: path.to_path_buf(),
        message: format!("failed to create ICO file: {}", e),
    })?;

    dir.write(BufWriter::new(file)).map_err(|e| FavemojiError::Io {
        path: path.to_path_buf(),
        message: format!("failed to write ICO: {}", e),
    })?;

    Ok(())
}
