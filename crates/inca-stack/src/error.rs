//! Error types for locating and stacking archive files.

use std::path::PathBuf;

use thiserror::Error;

use inca_common::{DayStampError, GridDims, UnknownProductError};

/// Result type for locate and stack operations.
pub type Result<T> = std::result::Result<T, StackError>;

/// Fatal failures of the locate and stack pipeline.
///
/// Per-slot conditions (a missing file, an unreadable container) are not
/// errors: they are logged and absorbed as sentinel-filled layers.
#[derive(Error, Debug)]
pub enum StackError {
    /// Tag does not name a known product
    #[error(transparent)]
    UnknownProduct(#[from] UnknownProductError),

    /// Date token does not have the YYYY-MM-DD shape
    #[error(transparent)]
    InvalidDate(#[from] DayStampError),

    /// Root directory missing or not a directory
    #[error("Data directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Two discovered files share a basename
    #[error("Duplicate file name: {} collides with {}", .second.display(), .first.display())]
    DuplicateFile { first: PathBuf, second: PathBuf },

    /// A slot's grid disagrees with the reference dimensions
    #[error("Grid size mismatch in {}: expected {expected}, found {found}", .path.display())]
    SizeMismatch {
        expected: GridDims,
        found: GridDims,
        path: PathBuf,
    },

    /// Every requested slot was missing or unreadable
    #[error("No valid data in any slot")]
    NoValidData,
}
