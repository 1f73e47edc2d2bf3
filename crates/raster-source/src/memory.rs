//! In-memory raster source for synthetic data and tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ndarray::Array2;

use crate::error::{SourceError, SourceResult};
use crate::source::{RasterBand, RasterContainer, RasterSource};

/// Registry of containers keyed by path.
///
/// Paths are plain map keys; nothing has to exist on the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    containers: HashMap<PathBuf, MemoryContainer>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container under `path`, replacing any previous entry.
    pub fn insert(&mut self, path: impl Into<PathBuf>, container: MemoryContainer) {
        self.containers.insert(path.into(), container);
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

impl RasterSource for MemorySource {
    type Container = MemoryContainer;

    fn open(&self, path: &Path) -> SourceResult<MemoryContainer> {
        self.containers.get(path).cloned().ok_or_else(|| {
            SourceError::OpenContainer(format!("No container registered at {}", path.display()))
        })
    }
}

/// A container holding its sub-dataset grids directly.
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    bands: Vec<Array2<f64>>,
    metadata: HashMap<String, String>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sub-dataset grid in row-major `(height, width)` layout.
    pub fn with_band(mut self, band: Array2<f64>) -> Self {
        self.bands.push(band);
        self
    }

    /// Set a container metadata item.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl RasterContainer for MemoryContainer {
    fn subdataset_count(&self) -> usize {
        self.bands.len()
    }

    fn metadata_item(&self, key: &str) -> Option<String> {
        self.metadata.get(key).cloned()
    }

    fn read_subdataset(&self, index: usize) -> SourceResult<RasterBand> {
        let band = self
            .bands
            .get(index)
            .ok_or(SourceError::SubdatasetIndex {
                index,
                count: self.bands.len(),
            })?;
        Ok(RasterBand::from_values(band.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inca_common::GridDims;

    #[test]
    fn test_open_registered_path() {
        let mut source = MemorySource::new();
        source.insert(
            "/virtual/a.h5",
            MemoryContainer::new().with_band(Array2::from_elem((2, 3), 1.5)),
        );

        let container = source.open(Path::new("/virtual/a.h5")).unwrap();
        assert_eq!(container.subdataset_count(), 1);
        let band = container.read_subdataset(0).unwrap();
        assert_eq!(band.dims, GridDims::new(3, 2));
        assert_eq!(band.values[[0, 0]], 1.5);
    }

    #[test]
    fn test_open_unknown_path_fails() {
        let source = MemorySource::new();
        let err = source.open(Path::new("/virtual/missing.h5")).unwrap_err();
        assert!(matches!(err, SourceError::OpenContainer(_)));
    }

    #[test]
    fn test_band_index_out_of_range() {
        let container = MemoryContainer::new().with_band(Array2::zeros((2, 2)));
        let err = container.read_subdataset(1).unwrap_err();
        assert!(matches!(
            err,
            SourceError::SubdatasetIndex { index: 1, count: 1 }
        ));
    }

    #[test]
    fn test_metadata_items() {
        let container = MemoryContainer::new().with_metadata("what_nodata", "255.0");
        assert_eq!(
            container.metadata_item("what_nodata").as_deref(),
            Some("255.0")
        );
        assert_eq!(container.metadata_item("what_gain"), None);
    }
}
