//! Pad a raster so both sides are powers of two

use crate::io::error::{Result, invalid_geometry};
use crate::spatial::grid::check_canvas_bytes;
use crate::spatial::tiles::paste;
use image::RgbaImage;
use log::debug;

/// Smallest power-of-two size that holds a `width` x `height` raster
///
/// # Errors
///
/// Returns `InvalidGeometry` for an empty raster, when the next power of
/// two exceeds `u32` or when the padded raster is too large to allocate
pub fn power_of_two_size(width: u32, height: u32) -> Result<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(invalid_geometry(&format!(
            "cannot pad an empty {width}x{height} image"
        )));
    }

    let padded_width = width
        .checked_next_power_of_two()
        .ok_or_else(|| invalid_geometry(&format!("width {width} has no power of two above it")))?;
    let padded_height = height.checked_next_power_of_two().ok_or_else(|| {
        invalid_geometry(&format!("height {height} has no power of two above it"))
    })?;
    check_canvas_bytes(padded_width, padded_height)?;

    Ok((padded_width, padded_height))
}

/// Place `source` at the top-left of a transparent power-of-two canvas
///
/// Content is never scaled. A raster already sized in powers of two comes
/// back unchanged.
///
/// # Errors
///
/// Returns `InvalidGeometry` under the same conditions as `power_of_two_size`
pub fn pad_to_power_of_two(source: &RgbaImage) -> Result<RgbaImage> {
    let (width, height) = power_of_two_size(source.width(), source.height())?;
    debug!(
        "pow2: {}x{} -> {width}x{height}",
        source.width(),
        source.height()
    );

    let mut output = RgbaImage::new(width, height);
    paste(&mut output, source, 0, 0);
    Ok(output)
}
