//! PNG output for rendered icons.

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{IconError, Result};

/// Write an RGBA image to a PNG file, replacing any existing file.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}
