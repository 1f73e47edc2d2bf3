//! Error types for raster container access.

use thiserror::Error;

/// Result type for raster source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised while opening or reading raster containers.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The container could not be opened
    #[error("Failed to open container: {0}")]
    OpenContainer(String),

    /// Requested sub-dataset does not exist
    #[error("Sub-dataset index {index} out of range (container has {count})")]
    SubdatasetIndex { index: usize, count: usize },

    /// Decoding a sub-dataset failed
    #[error("Failed to read sub-dataset: {0}")]
    ReadFailed(String),
}
