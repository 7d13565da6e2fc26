//! Error types for tile set transforms and their file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all tile set operations
#[derive(Debug)]
pub enum TilesetError {
    /// Grid parameters do not describe a usable tile grid
    ///
    /// Raised when the derived tile count is zero or negative, a tile
    /// dimension is zero, or a destination size does not fit in a raster.
    InvalidGeometry {
        /// Description of what's wrong with the geometry
        reason: String,
    },

    /// Operation received the wrong number of numeric parameters
    ParameterCountMismatch {
        /// Name of the requested operation
        operation: &'static str,
        /// Number of parameters the operation takes
        expected: usize,
        /// Number of parameters supplied
        found: usize,
    },

    /// Destination already exists and overwriting was not requested
    DestinationExists {
        /// Existing destination path
        path: PathBuf,
    },

    /// Failed to open or decode the source image
    SourceUnreadable {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or write a destination image
    DestinationUnwritable {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Directory preparation for the destination failed
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TilesetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { reason } => {
                write!(f, "Invalid tile geometry: {reason}")
            }
            Self::ParameterCountMismatch {
                operation,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Invalid number of parameters for '{operation}': \
                     expected {expected}, got {found}"
                )
            }
            Self::DestinationExists { path } => {
                write!(
                    f,
                    "Output '{}' already exists (use --overwrite to replace it)",
                    path.display()
                )
            }
            Self::SourceUnreadable { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::DestinationUnwritable { path, source } => {
                write!(f, "Failed to write image '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TilesetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceUnreadable { source, .. } | Self::DestinationUnwritable { source, .. } => {
                Some(source)
            }
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tile set results
pub type Result<T> = std::result::Result<T, TilesetError>;

/// Create an invalid geometry error
pub fn invalid_geometry(reason: &impl ToString) -> TilesetError {
    TilesetError::InvalidGeometry {
        reason: reason.to_string(),
    }
}
