//! Split a tile set into one raster per tile

use crate::io::configuration::FIRST_TILE_NUMBER;
use crate::io::error::Result;
use crate::spatial::GridLayout;
use crate::spatial::tiles::crop_tile;
use image::RgbaImage;
use log::debug;

/// Crop every tile of `source` in row-major order
///
/// # Errors
///
/// Returns `InvalidGeometry` if `grid` yields no tiles for the source
pub fn extract_tiles(source: &RgbaImage, grid: GridLayout) -> Result<Vec<RgbaImage>> {
    let dimensions = grid.dimensions_for(source.width(), source.height())?;
    debug!(
        "extract: {}x{} tiles of {}x{}",
        dimensions.horizontal, dimensions.vertical, grid.tile_width, grid.tile_height
    );

    Ok(dimensions
        .indices()
        .map(|index| crop_tile(source, grid.tile_rect(index)))
        .collect())
}

/// File name for the tile at `position` in extraction order
///
/// Numbering starts at [`FIRST_TILE_NUMBER`]. `extension` is appended
/// verbatim and should include its leading dot.
pub fn tile_file_name(position: usize, extension: &str) -> String {
    format!("{}{extension}", position + FIRST_TILE_NUMBER)
}
