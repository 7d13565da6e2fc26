//! Tile grid geometry
//!
//! A tile set is a raster holding equally sized tiles arranged in a regular
//! grid, separated by `spacing` pixels and surrounded by a `margin`. The same
//! formulas locate tiles in the source and place them in a destination, so
//! every operation shares this module.

use crate::io::configuration::{BYTES_PER_PIXEL, MAX_CANVAS_BYTES};
use crate::io::error::{Result, invalid_geometry};

/// Tile size plus the spacing and margin around tiles in a raster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridLayout {
    /// Width of a single tile in pixels
    pub tile_width: u32,
    /// Height of a single tile in pixels
    pub tile_height: u32,
    /// Gap between adjacent tiles in pixels
    pub spacing: u32,
    /// Border between the raster edge and the outermost tiles in pixels
    pub margin: u32,
}

/// Number of tiles along each axis of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    /// Tiles per row
    pub horizontal: u32,
    /// Tiles per column
    pub vertical: u32,
}

/// Position of a tile within the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileIndex {
    /// Zero-based column
    pub column: u32,
    /// Zero-based row
    pub row: u32,
}

/// Pixel rectangle occupied by one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRect {
    /// Left edge (inclusive)
    pub x: u32,
    /// Top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl GridLayout {
    /// Create a layout from tile size, spacing and margin
    pub const fn new(tile_width: u32, tile_height: u32, spacing: u32, margin: u32) -> Self {
        Self {
            tile_width,
            tile_height,
            spacing,
            margin,
        }
    }

    /// Same tile size with a different spacing and margin
    pub const fn with_spacing_and_margin(self, spacing: u32, margin: u32) -> Self {
        Self {
            spacing,
            margin,
            ..self
        }
    }

    /// Layout that leaves room for `length` extruded pixels on every tile side
    ///
    /// Extrusion widens each gap by twice the length and pushes the first
    /// tile inwards by the length, which is also the spacing and margin to
    /// use when importing the extruded tile set elsewhere.
    pub const fn extruded(self, length: u32) -> Self {
        Self {
            spacing: self.spacing.saturating_add(length.saturating_mul(2)),
            margin: self.margin.saturating_add(length),
            ..self
        }
    }

    /// Derive how many whole tiles fit in a `width` x `height` raster
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` if a tile dimension is zero or fewer than
    /// one tile fits along either axis
    pub fn dimensions_for(&self, width: u32, height: u32) -> Result<GridDimensions> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(invalid_geometry(&format!(
                "tile size {}x{} must be positive",
                self.tile_width, self.tile_height
            )));
        }

        let horizontal = tiles_along(
            "horizontal",
            width,
            self.tile_width,
            self.spacing,
            self.margin,
        )?;
        let vertical = tiles_along(
            "vertical",
            height,
            self.tile_height,
            self.spacing,
            self.margin,
        )?;

        Ok(GridDimensions {
            horizontal,
            vertical,
        })
    }

    /// Raster size needed to hold `dimensions` tiles with this layout
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` if the size is zero, exceeds `u32` or the
    /// raster would be larger than `MAX_CANVAS_BYTES`
    pub fn canvas_size(&self, dimensions: GridDimensions) -> Result<(u32, u32)> {
        let width = canvas_extent(
            self.tile_width,
            self.spacing,
            self.margin,
            dimensions.horizontal,
        )?;
        let height = canvas_extent(
            self.tile_height,
            self.spacing,
            self.margin,
            dimensions.vertical,
        )?;
        check_canvas_bytes(width, height)?;
        Ok((width, height))
    }

    /// Top-left pixel of a tile
    ///
    /// Indices come from `dimensions_for` or `canvas_size` on the same
    /// layout, which keeps the result inside `u32`.
    pub const fn tile_origin(&self, index: TileIndex) -> (u32, u32) {
        let x = self.margin.saturating_add(
            self.tile_width
                .saturating_add(self.spacing)
                .saturating_mul(index.column),
        );
        let y = self.margin.saturating_add(
            self.tile_height
                .saturating_add(self.spacing)
                .saturating_mul(index.row),
        );
        (x, y)
    }

    /// Full rectangle covered by a tile
    pub const fn tile_rect(&self, index: TileIndex) -> TileRect {
        let (x, y) = self.tile_origin(index);
        TileRect {
            x,
            y,
            width: self.tile_width,
            height: self.tile_height,
        }
    }
}

impl GridDimensions {
    /// Total number of tiles in the grid
    pub const fn tile_count(&self) -> u64 {
        self.horizontal as u64 * self.vertical as u64
    }

    /// All tile indices in row-major order
    pub fn indices(&self) -> impl Iterator<Item = TileIndex> + use<> {
        let horizontal = self.horizontal;
        (0..self.vertical)
            .flat_map(move |row| (0..horizontal).map(move |column| TileIndex { column, row }))
    }
}

/// Reject destination rasters too large to allocate
///
/// # Errors
///
/// Returns `InvalidGeometry` if `width` x `height` RGBA pixels exceed
/// `MAX_CANVAS_BYTES`
pub fn check_canvas_bytes(width: u32, height: u32) -> Result<()> {
    let bytes = u64::from(width) * u64::from(height) * BYTES_PER_PIXEL;
    if bytes > MAX_CANVAS_BYTES {
        return Err(invalid_geometry(&format!(
            "destination {width}x{height} too large ({bytes} bytes, limit {MAX_CANVAS_BYTES})"
        )));
    }
    Ok(())
}

// Floor division keeps partial trailing tiles out of the grid
fn tiles_along(axis: &str, extent: u32, tile: u32, spacing: u32, margin: u32) -> Result<u32> {
    let usable = i64::from(extent) - 2 * i64::from(margin) + i64::from(spacing);
    let step = i64::from(tile) + i64::from(spacing);
    let count = usable.div_euclid(step);

    if count <= 0 {
        return Err(invalid_geometry(&format!(
            "no {axis} tiles fit in {extent}px \
             (tile {tile}px, spacing {spacing}px, margin {margin}px)"
        )));
    }

    u32::try_from(count).map_err(|error| invalid_geometry(&error))
}

fn canvas_extent(tile: u32, spacing: u32, margin: u32, count: u32) -> Result<u32> {
    let extent = u64::from(margin)
        .checked_mul(2)
        .and_then(|borders| borders.checked_add(u64::from(tile).checked_mul(u64::from(count))?))
        .and_then(|body| {
            body.checked_add(u64::from(spacing).checked_mul(u64::from(count.saturating_sub(1)))?)
        })
        .ok_or_else(|| invalid_geometry(&"destination size overflows"))?;

    if extent == 0 {
        return Err(invalid_geometry(&format!(
            "destination extent for {count} tiles of {tile}px is empty"
        )));
    }

    u32::try_from(extent).map_err(|error| invalid_geometry(&error))
}
