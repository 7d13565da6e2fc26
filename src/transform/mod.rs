//! Tile set transforms
//!
//! Each operation reads a source raster and builds a fresh result without
//! touching the source. Geometry is validated before any pixel is copied.

/// Split a tile set into individual tiles
pub mod extract;
/// Edge extrusion around every tile
pub mod extrude;
/// Re-packing with new spacing and margin
pub mod layout;
/// Power-of-two canvas padding
pub mod pow2;

use crate::io::error::Result;
use crate::spatial::GridLayout;
use image::RgbaImage;

/// A fully parameterised tile set operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Re-pack tiles with a new spacing and margin
    Layout {
        /// Current arrangement of the source
        grid: GridLayout,
        /// Spacing of the result
        spacing: u32,
        /// Margin of the result
        margin: u32,
    },
    /// Pad the canvas to power-of-two dimensions
    Pow2,
    /// Write every tile to its own raster
    Extract {
        /// Current arrangement of the source
        grid: GridLayout,
    },
    /// Repeat each tile's edges outwards
    Extrude {
        /// Current arrangement of the source
        grid: GridLayout,
        /// Number of pixels to extrude on each side
        length: u32,
        /// Also paint the corner blocks between extruded edges
        fill_corners: bool,
    },
}

/// Result of applying an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A single destination raster
    Image(RgbaImage),
    /// One raster per tile in row-major order
    Tiles(Vec<RgbaImage>),
}

impl Operation {
    /// Run the operation against `source`
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` if the operation's parameters do not fit the
    /// source raster
    pub fn apply(&self, source: &RgbaImage) -> Result<Outcome> {
        match *self {
            Self::Layout {
                grid,
                spacing,
                margin,
            } => layout::relayout(source, grid, spacing, margin).map(Outcome::Image),
            Self::Pow2 => pow2::pad_to_power_of_two(source).map(Outcome::Image),
            Self::Extract { grid } => extract::extract_tiles(source, grid).map(Outcome::Tiles),
            Self::Extrude {
                grid,
                length,
                fill_corners,
            } => extrude::extrude(source, grid, length, fill_corners).map(Outcome::Image),
        }
    }
}
