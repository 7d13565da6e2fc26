//! Pixel block primitives for cutting and placing tiles
//!
//! Thin wrappers over `image::imageops` so the transforms only deal in
//! tile rectangles and offsets.

use crate::spatial::grid::TileRect;
use image::RgbaImage;
use image::imageops;

/// One side of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Leftmost column
    Left,
    /// Rightmost column
    Right,
    /// Topmost row
    Top,
    /// Bottommost row
    Bottom,
}

impl Edge {
    /// Edges in the order extrusion paints them
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Cut the 1px strip along this edge out of `tile`
    pub fn strip(self, tile: &RgbaImage) -> RgbaImage {
        let (width, height) = tile.dimensions();
        let rect = match self {
            Self::Left => (0, 0, 1, height),
            Self::Right => (width.saturating_sub(1), 0, 1, height),
            Self::Top => (0, 0, width, 1),
            Self::Bottom => (0, height.saturating_sub(1), width, 1),
        };
        imageops::crop_imm(tile, rect.0, rect.1, rect.2, rect.3).to_image()
    }

    /// Where the `step`-th copy of this edge's strip goes
    ///
    /// `origin` is the destination position of the tile body. Step 0 sits
    /// directly against the body, each further step one pixel outwards.
    pub fn extrusion_offset(
        self,
        origin: (u32, u32),
        tile_size: (u32, u32),
        step: u32,
    ) -> (i64, i64) {
        let x = i64::from(origin.0);
        let y = i64::from(origin.1);
        let step = i64::from(step);
        match self {
            Self::Left => (x - 1 - step, y),
            Self::Right => (x + i64::from(tile_size.0) + step, y),
            Self::Top => (x, y - 1 - step),
            Self::Bottom => (x, y + i64::from(tile_size.1) + step),
        }
    }
}

/// Copy the pixels under `rect` into a new raster
pub fn crop_tile(source: &RgbaImage, rect: TileRect) -> RgbaImage {
    imageops::crop_imm(source, rect.x, rect.y, rect.width, rect.height).to_image()
}

/// Overwrite `canvas` with `block` placed at `(x, y)`
///
/// Pixels falling outside the canvas are dropped. Alpha is copied as-is
/// rather than blended.
pub fn paste(canvas: &mut RgbaImage, block: &RgbaImage, x: i64, y: i64) {
    imageops::replace(canvas, block, x, y);
}

/// Paint the `length` x `length` corner blocks around a placed tile
///
/// Each block takes the colour of the tile pixel nearest to it. Extrusion
/// alone never touches these blocks.
pub fn fill_corners(canvas: &mut RgbaImage, tile: &RgbaImage, origin: (u32, u32), length: u32) {
    if length == 0 {
        return;
    }

    let (width, height) = tile.dimensions();
    let last_x = width.saturating_sub(1);
    let last_y = height.saturating_sub(1);
    let (x, y) = (i64::from(origin.0), i64::from(origin.1));
    let length_i = i64::from(length);

    let corners = [
        ((0, 0), (x - length_i, y - length_i)),
        ((last_x, 0), (x + i64::from(width), y - length_i)),
        ((0, last_y), (x - length_i, y + i64::from(height))),
        ((last_x, last_y), (x + i64::from(width), y + i64::from(height))),
    ];

    for ((source_x, source_y), (block_x, block_y)) in corners {
        if let Some(&colour) = tile.get_pixel_checked(source_x, source_y) {
            let block = RgbaImage::from_pixel(length, length, colour);
            paste(canvas, &block, block_x, block_y);
        }
    }
}
