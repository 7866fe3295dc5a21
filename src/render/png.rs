//! PNG output for the base bitmap.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{FavemojiError, Result};

/// Write a bitmap to a PNG file.
///
/// The format is forced to PNG regardless of the path's extension.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| FavemojiError::Io {
            path: path.to_path_buf(),
            message: format!("failed to write PNG: {}", e),
        })?;

    Ok(())
}
