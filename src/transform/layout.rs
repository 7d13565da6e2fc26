//! Re-pack a tile set with a different spacing and margin

use crate::io::error::Result;
use crate::spatial::GridLayout;
use crate::spatial::tiles::{crop_tile, paste};
use image::RgbaImage;
use log::debug;

/// Copy every tile of `source` into a new raster laid out with `spacing` and `margin`
///
/// Tiles keep their grid index; only the gaps around them change. Pixels
/// outside tiles in the source are not carried over.
///
/// # Errors
///
/// Returns `InvalidGeometry` if `grid` yields no tiles for the source or the
/// new layout does not fit in a raster
pub fn relayout(
    source: &RgbaImage,
    grid: GridLayout,
    spacing: u32,
    margin: u32,
) -> Result<RgbaImage> {
    let dimensions = grid.dimensions_for(source.width(), source.height())?;
    let target = grid.with_spacing_and_margin(spacing, margin);
    let (width, height) = target.canvas_size(dimensions)?;

    debug!(
        "layout: {}x{} tiles, {}x{} -> {width}x{height}",
        dimensions.horizontal,
        dimensions.vertical,
        source.width(),
        source.height()
    );

    let mut output = RgbaImage::new(width, height);
    for index in dimensions.indices() {
        let tile = crop_tile(source, grid.tile_rect(index));
        let (x, y) = target.tile_origin(index);
        paste(&mut output, &tile, i64::from(x), i64::from(y));
    }

    Ok(output)
}
