//! Extrude tile edges outwards to hide filtering seams
//!
//! Every tile is moved apart from its neighbours and its outermost rows and
//! columns are repeated into the freed space. Corner blocks between two
//! extruded edges stay transparent unless corner filling is requested.

use crate::io::error::Result;
use crate::spatial::GridLayout;
use crate::spatial::tiles::{Edge, crop_tile, fill_corners, paste};
use image::RgbaImage;
use log::debug;

/// Copy every tile into a wider grid and repeat its edges `length` pixels outwards
///
/// With `length == 0` this is a plain copy into the same layout.
///
/// # Errors
///
/// Returns `InvalidGeometry` if `grid` yields no tiles for the source or the
/// extruded layout does not fit in a raster
pub fn extrude(
    source: &RgbaImage,
    grid: GridLayout,
    length: u32,
    corners: bool,
) -> Result<RgbaImage> {
    let dimensions = grid.dimensions_for(source.width(), source.height())?;
    let target = grid.extruded(length);
    let (width, height) = target.canvas_size(dimensions)?;
    let tile_size = (grid.tile_width, grid.tile_height);

    debug!(
        "extrude: {}x{} tiles by {length}px, {}x{} -> {width}x{height}",
        dimensions.horizontal,
        dimensions.vertical,
        source.width(),
        source.height()
    );

    let mut output = RgbaImage::new(width, height);
    for index in dimensions.indices() {
        let tile = crop_tile(source, grid.tile_rect(index));
        let origin = target.tile_origin(index);
        paste(&mut output, &tile, i64::from(origin.0), i64::from(origin.1));

        for edge in Edge::ALL {
            let strip = edge.strip(&tile);
            for step in 0..length {
                let (x, y) = edge.extrusion_offset(origin, tile_size, step);
                paste(&mut output, &strip, x, y);
            }
        }

        if corners {
            fill_corners(&mut output, &tile, origin, length);
        }
    }

    Ok(output)
}
