//! Tile grid geometry and pixel block handling
//!
//! This module contains spatial-related functionality including:
//! - Tile counts, rectangles and destination sizes for a grid layout
//! - Cropping, pasting and edge strips for individual tiles

/// Grid layout formulas
pub mod grid;
/// Tile cropping, pasting and edge strips
pub mod tiles;

pub use grid::{GridDimensions, GridLayout, TileIndex, TileRect};
