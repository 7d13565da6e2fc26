//! Raster decoding and encoding with path-aware errors

use crate::io::error::{Result, TilesetError};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::Path;

/// Decode any supported image file into an RGBA raster
///
/// # Errors
///
/// Returns `SourceUnreadable` if the file is missing or cannot be decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    image::open(path)
        .map(DynamicImage::into_rgba8)
        .map_err(|e| TilesetError::SourceUnreadable {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Encode `raster` to `path`, picking the format from the extension
///
/// Pixels are converted to a colour type the chosen encoder accepts: JPEG
/// drops alpha, HDR is written as RGB float and drops alpha, OpenEXR is
/// written as RGBA float and Farbfeld as 16-bit RGBA. Every other format is
/// encoded as 8-bit RGBA.
///
/// # Errors
///
/// Returns `DestinationUnwritable` if the format is unknown or the file
/// cannot be written
pub fn save_rgba(raster: &RgbaImage, path: &Path) -> Result<()> {
    let converted = || DynamicImage::ImageRgba8(raster.clone());
    let result = match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) => converted().into_rgb8().save(path),
        Ok(ImageFormat::Hdr) => converted().into_rgb32f().save(path),
        Ok(ImageFormat::OpenExr) => converted().into_rgba32f().save(path),
        Ok(ImageFormat::Farbfeld) => converted().into_rgba16().save(path),
        _ => raster.save(path),
    };

    result.map_err(|e| TilesetError::DestinationUnwritable {
        path: path.to_path_buf(),
        source: e,
    })
}
