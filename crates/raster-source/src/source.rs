//! The raster container capability.

use std::path::Path;

use ndarray::Array2;

use inca_common::GridDims;

use crate::error::SourceResult;

/// Capability to open raster containers by path.
///
/// The stacking routines go through this trait instead of a raster library,
/// so production code plugs in the HDF5 backend while tests run against the
/// in-memory registry.
pub trait RasterSource {
    type Container: RasterContainer;

    /// Open the container file at `path`.
    ///
    /// A path that does not reference a readable container of this source
    /// is an error; callers decide whether that is fatal.
    fn open(&self, path: &Path) -> SourceResult<Self::Container>;
}

/// One opened container file.
pub trait RasterContainer {
    /// Number of embedded sub-datasets.
    fn subdataset_count(&self) -> usize;

    /// Container-level metadata item by key, if present.
    fn metadata_item(&self, key: &str) -> Option<String>;

    /// Read the 2-D grid of the sub-dataset at `index`.
    fn read_subdataset(&self, index: usize) -> SourceResult<RasterBand>;
}

/// A single decoded sub-dataset.
#[derive(Debug, Clone)]
pub struct RasterBand {
    /// Layer size, `width` columns by `height` rows
    pub dims: GridDims,
    /// Cell values in row-major `(height, width)` layout
    pub values: Array2<f64>,
}

impl RasterBand {
    /// Wrap a row-major grid, deriving the dims from its shape.
    pub fn from_values(values: Array2<f64>) -> Self {
        let (rows, cols) = values.dim();
        Self {
            dims: GridDims::new(cols, rows),
            values,
        }
    }
}
