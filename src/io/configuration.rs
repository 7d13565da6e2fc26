//! Output naming, parameter counts and display settings

// Output settings
/// Suffix added to the input file stem for single-file results
pub const OUTPUT_SUFFIX: &str = "_out";
/// Directory created next to the input for extracted tiles
pub const EXTRACT_DIRECTORY: &str = "out";
/// Number given to the first extracted tile
pub const FIRST_TILE_NUMBER: usize = 1;

// Positional parameters expected after the mode name
/// `layout`: tile width, tile height, spacing, margin, new spacing, new margin
pub const LAYOUT_PARAMETERS: usize = 6;
/// `pow2` takes no parameters
pub const POW2_PARAMETERS: usize = 0;
/// `extract`: tile width, tile height, spacing, margin
pub const EXTRACT_PARAMETERS: usize = 4;
/// `extrude`: tile width, tile height, spacing, margin, extrusion length
pub const EXTRUDE_PARAMETERS: usize = 5;

// Progress bar display settings
/// Progress bar layout for per-tile writes
pub const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] Tiles: [{bar:40.cyan/blue}] {pos}/{len}";

// Destination limits
/// Largest destination raster in bytes, matching `image::Limits::default().max_alloc`
pub const MAX_CANVAS_BYTES: u64 = 512 * 1024 * 1024;
/// Bytes per RGBA8 pixel
pub const BYTES_PER_PIXEL: u64 = 4;
