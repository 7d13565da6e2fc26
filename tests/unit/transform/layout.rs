//! Tests for re-packing tile sets with a new spacing and margin

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use tilesmith::TilesetError;
    use tilesmith::spatial::tiles::crop_tile;
    use tilesmith::spatial::{GridDimensions, GridLayout, TileIndex, TileRect};
    use tilesmith::transform::layout::relayout;

    const GAP: Rgba<u8> = Rgba([255, 0, 255, 255]);

    // Gaps are filled with GAP, every tile pixel encodes its tile and position
    fn sheet(layout: GridLayout, horizontal: u32, vertical: u32) -> RgbaImage {
        let dimensions = GridDimensions {
            horizontal,
            vertical,
        };
        let (width, height) = layout.canvas_size(dimensions).unwrap();
        let mut image = RgbaImage::from_pixel(width, height, GAP);
        for index in dimensions.indices() {
            let (x, y) = layout.tile_origin(index);
            for dy in 0..layout.tile_height {
                for dx in 0..layout.tile_width {
                    let tag = (index.row * horizontal + index.column) as u8;
                    image.put_pixel(x + dx, y + dy, Rgba([tag, dx as u8, dy as u8, 255]));
                }
            }
        }
        image
    }

    fn rect(x: u32, y: u32, size: u32) -> TileRect {
        TileRect {
            x,
            y,
            width: size,
            height: size,
        }
    }

    // Tests removing spacing and margin from a 132px sheet of 64px tiles
    // Verified by pasting at the source position instead of the new one
    #[test]
    fn test_relayout_removes_spacing_and_margin() {
        let source = sheet(GridLayout::new(64, 64, 2, 1), 2, 2);
        assert_eq!(source.dimensions(), (132, 132));

        let output = relayout(&source, GridLayout::new(64, 64, 2, 1), 0, 0).unwrap();

        assert_eq!(output.dimensions(), (128, 128));
        assert_eq!(
            crop_tile(&output, rect(0, 0, 64)),
            crop_tile(&source, rect(1, 1, 64))
        );
        assert_eq!(
            crop_tile(&output, rect(64, 0, 64)),
            crop_tile(&source, rect(67, 1, 64))
        );
        assert_eq!(
            crop_tile(&output, rect(64, 64, 64)),
            crop_tile(&source, rect(67, 67, 64))
        );
    }

    // Tests new gaps and margins are transparent
    // Verified by initialising the canvas from the source
    #[test]
    fn test_relayout_gaps_are_transparent() {
        let source = sheet(GridLayout::new(4, 4, 0, 0), 2, 1);
        let output = relayout(&source, GridLayout::new(4, 4, 0, 0), 3, 1).unwrap();

        assert_eq!(output.dimensions(), (1 + 4 + 3 + 4 + 1, 1 + 4 + 1));
        assert_eq!(output.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(output.get_pixel(6, 2), &Rgba([0, 0, 0, 0]));
        assert_eq!(output.get_pixel(1, 1), &Rgba([0, 0, 0, 255]));
        assert_eq!(output.get_pixel(8, 1), &Rgba([1, 0, 0, 255]));
    }

    // Tests tiles keep their grid index when spacing grows
    // Verified by iterating columns in reverse
    #[test]
    fn test_relayout_preserves_tile_order() {
        let grid = GridLayout::new(3, 2, 1, 2);
        let source = sheet(grid, 3, 2);
        let target = grid.with_spacing_and_margin(5, 0);
        let output = relayout(&source, grid, 5, 0).unwrap();

        for row in 0..2 {
            for column in 0..3 {
                let index = TileIndex { column, row };
                let (x, y) = target.tile_origin(index);
                let tag = (row * 3 + column) as u8;
                assert_eq!(output.get_pixel(x, y), &Rgba([tag, 0, 0, 255]));
                assert_eq!(output.get_pixel(x + 2, y + 1), &Rgba([tag, 2, 1, 255]));
            }
        }
    }

    // Tests sheets smaller than one tile are rejected
    // Verified by skipping geometry validation
    #[test]
    fn test_relayout_invalid_geometry() {
        let source = RgbaImage::new(8, 8);
        let result = relayout(&source, GridLayout::new(16, 16, 0, 0), 0, 0);

        assert!(matches!(result, Err(TilesetError::InvalidGeometry { .. })));
    }

    // Tests a margin too large to allocate is rejected instead of panicking
    // Verified by allocating the canvas before checking its byte size
    #[test]
    fn test_relayout_destination_too_large() {
        let source = RgbaImage::new(4, 4);
        let result = relayout(&source, GridLayout::new(4, 4, 0, 0), 0, 1_000_000_000);

        assert!(matches!(result, Err(TilesetError::InvalidGeometry { .. })));
    }
}
