//! Command-line interface for running one tile set operation on one image

use crate::io::configuration::{
    EXTRACT_DIRECTORY, EXTRACT_PARAMETERS, EXTRUDE_PARAMETERS, LAYOUT_PARAMETERS, OUTPUT_SUFFIX,
    POW2_PARAMETERS,
};
use crate::io::error::{Result, TilesetError};
use crate::io::image::{load_rgba, save_rgba};
use crate::io::progress::TileProgress;
use crate::spatial::GridLayout;
use crate::transform::extract::tile_file_name;
use crate::transform::{Operation, Outcome};
use clap::{Parser, ValueEnum};
use image::RgbaImage;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "tilesmith")]
#[command(
    author,
    version,
    about = "Re-layout, extract, extrude or pad tile set images"
)]
/// Command-line arguments for the tile set tool
pub struct Cli {
    /// Tile set image to process
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Operation to run
    #[arg(value_enum, value_name = "MODE")]
    pub mode: Mode,

    /// Numeric parameters for the operation:
    /// layout: TILE_W TILE_H SPACING MARGIN NEW_SPACING NEW_MARGIN;
    /// pow2: none;
    /// extract: TILE_W TILE_H SPACING MARGIN;
    /// extrude: TILE_W TILE_H SPACING MARGIN LENGTH
    #[arg(value_name = "PARAMS")]
    pub params: Vec<u32>,

    /// Replace the output file or directory if it exists
    #[arg(short = 'w', long)]
    pub overwrite: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,

    /// Paint the corner blocks left empty by extrusion
    #[arg(long)]
    pub fill_corners: bool,
}

/// Operation names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Mode {
    /// Change tile spacing and margin
    Layout,
    /// Pad each dimension to the next power of two
    Pow2,
    /// Write each tile to a numbered file
    Extract,
    /// Repeat tile edges outwards
    Extrude,
}

impl Mode {
    /// Name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Layout => "layout",
            Self::Pow2 => "pow2",
            Self::Extract => "extract",
            Self::Extrude => "extrude",
        }
    }

    /// Number of numeric parameters the mode takes
    pub const fn parameter_count(self) -> usize {
        match self {
            Self::Layout => LAYOUT_PARAMETERS,
            Self::Pow2 => POW2_PARAMETERS,
            Self::Extract => EXTRACT_PARAMETERS,
            Self::Extrude => EXTRUDE_PARAMETERS,
        }
    }
}

impl Cli {
    /// Turn the mode and its positional parameters into an operation
    ///
    /// # Errors
    ///
    /// Returns `ParameterCountMismatch` if the number of parameters does not
    /// match the mode
    pub fn operation(&self) -> Result<Operation> {
        let operation = match (self.mode, self.params.as_slice()) {
            (
                Mode::Layout,
                &[tile_width, tile_height, spacing, margin, new_spacing, new_margin],
            ) => Operation::Layout {
                grid: GridLayout::new(tile_width, tile_height, spacing, margin),
                spacing: new_spacing,
                margin: new_margin,
            },
            (Mode::Pow2, &[]) => Operation::Pow2,
            (Mode::Extract, &[tile_width, tile_height, spacing, margin]) => Operation::Extract {
                grid: GridLayout::new(tile_width, tile_height, spacing, margin),
            },
            (Mode::Extrude, &[tile_width, tile_height, spacing, margin, length]) => {
                Operation::Extrude {
                    grid: GridLayout::new(tile_width, tile_height, spacing, margin),
                    length,
                    fill_corners: self.fill_corners,
                }
            }
            _ => {
                return Err(TilesetError::ParameterCountMismatch {
                    operation: self.mode.name(),
                    expected: self.mode.parameter_count(),
                    found: self.params.len(),
                });
            }
        };

        Ok(operation)
    }

    /// Check if progress and summaries should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Where a mode writes its result for a given input
///
/// `extract` targets an `out` directory beside the input; every other mode
/// writes `<stem>_out.<ext>` beside it.
pub fn destination_path(input_path: &Path, mode: Mode) -> PathBuf {
    let directory = input_path.parent().unwrap_or_else(|| Path::new(""));

    if mode == Mode::Extract {
        return directory.join(EXTRACT_DIRECTORY);
    }

    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = input_path.extension().map_or_else(
        || format!("{}{OUTPUT_SUFFIX}", stem.to_string_lossy()),
        |extension| {
            format!(
                "{}{OUTPUT_SUFFIX}.{}",
                stem.to_string_lossy(),
                extension.to_string_lossy()
            )
        },
    );
    directory.join(output_name)
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// File or directory that was written
    pub destination: PathBuf,
    /// Number of image files written
    pub files_written: usize,
    /// Wall-clock time from argument validation to the last write
    pub elapsed: Duration,
}

/// Runs a single operation from parsed arguments
///
/// All checks (parameters, destination, decoding, geometry) happen before the
/// first byte is written, so a failed run leaves no output behind. The one
/// exception is an `extract` whose Nth tile write fails: earlier tiles stay.
pub struct TilesetProcessor {
    cli: Cli,
}

impl TilesetProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the requested operation and write its result
    ///
    /// # Errors
    ///
    /// Returns `ParameterCountMismatch`, `DestinationExists`,
    /// `SourceUnreadable` or `InvalidGeometry` before writing anything, and
    /// `FileSystem` or `DestinationUnwritable` if writing fails
    pub fn process(&self) -> Result<Report> {
        let start_time = Instant::now();
        let operation = self.cli.operation()?;
        let destination = destination_path(&self.cli.input, self.cli.mode);

        let replacing = destination.exists();
        if replacing && !self.cli.overwrite {
            return Err(TilesetError::DestinationExists { path: destination });
        }

        let source = load_rgba(&self.cli.input)?;
        let outcome = operation.apply(&source)?;

        if replacing {
            info!("replacing {}", destination.display());
            self.announce("> Output path exists, overwriting.");
            remove_destination(&destination)?;
        }

        let files_written = match outcome {
            Outcome::Image(raster) => {
                save_rgba(&raster, &destination)?;
                1
            }
            Outcome::Tiles(tiles) => self.write_tiles(&tiles, &destination)?,
        };

        let report = Report {
            destination,
            files_written,
            elapsed: start_time.elapsed(),
        };
        info!(
            "{} wrote {} file(s) to {}",
            self.cli.mode.name(),
            report.files_written,
            report.destination.display()
        );

        if let Operation::Extrude { grid, length, .. } = operation {
            let import = grid.extruded(length);
            self.announce(&format!("> New spacing: {} px.", import.spacing));
            self.announce(&format!("> New margin: {} px.", import.margin));
        }
        self.announce(&format!("Done in {:.3}s.", report.elapsed.as_secs_f64()));

        Ok(report)
    }

    fn write_tiles(&self, tiles: &[RgbaImage], directory: &Path) -> Result<usize> {
        std::fs::create_dir_all(directory).map_err(|e| TilesetError::FileSystem {
            path: directory.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;

        let extension = self
            .cli
            .input
            .extension()
            .map(|extension| format!(".{}", extension.to_string_lossy()))
            .unwrap_or_default();

        let progress = TileProgress::new(tiles.len() as u64, self.cli.should_show_progress());
        for (position, tile) in tiles.iter().enumerate() {
            save_rgba(tile, &directory.join(tile_file_name(position, &extension)))?;
            progress.advance();
        }
        let written = progress.finish();
        debug!("{written} tiles written to {}", directory.display());

        Ok(tiles.len())
    }

    // Allow print for user feedback, the summary lines are part of the tool's output
    #[allow(clippy::print_stdout)]
    fn announce(&self, message: &str) {
        if self.cli.should_show_progress() {
            println!("{message}");
        }
    }
}

fn remove_destination(path: &Path) -> Result<()> {
    let result = if path.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };

    result.map_err(|e| TilesetError::FileSystem {
        path: path.to_path_buf(),
        operation: "remove existing output",
        source: e,
    })
}
