//! Tile set image utilities
//!
//! Works on rasters holding a regular grid of equally sized tiles: re-pack the
//! grid with a new spacing and margin, split it into one file per tile,
//! extrude tile edges to avoid filtering seams, or pad the canvas to
//! power-of-two dimensions.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Tile grid geometry and pixel block primitives
pub mod spatial;
/// Tile set transforms, one module per operation
pub mod transform;

pub use io::error::{Result, TilesetError};
