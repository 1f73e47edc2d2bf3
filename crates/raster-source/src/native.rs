//! HDF5 raster containers using the native hdf5 library.
//!
//! Enabled by the `hdf5` feature; needs libhdf5 at build time. Sub-datasets
//! are the 2-D datasets of the file in in-file path order, which matches the
//! `dataset1/data1/data`, `dataset1/data2/data`, ... layout of the archive
//! files (so index 0 is the wind U plane and index 1 the V plane).

use std::path::Path;

use ndarray::Array2;

use crate::error::{SourceError, SourceResult};
use crate::source::{RasterBand, RasterContainer, RasterSource};

/// Raster source backed by HDF5 files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hdf5Source;

impl Hdf5Source {
    pub fn new() -> Self {
        Hdf5Source
    }
}

impl RasterSource for Hdf5Source {
    type Container = Hdf5Container;

    fn open(&self, path: &Path) -> SourceResult<Hdf5Container> {
        let file = hdf5::File::open(path)
            .map_err(|e| SourceError::OpenContainer(format!("{}: {}", path.display(), e)))?;

        let mut datasets = Vec::new();
        collect_2d_datasets(&file, &mut datasets)
            .map_err(|e| SourceError::OpenContainer(format!("{}: {}", path.display(), e)))?;
        datasets.sort_by_key(|dataset| dataset.name());

        Ok(Hdf5Container { file, datasets })
    }
}

/// One opened HDF5 file with its 2-D datasets indexed in path order.
#[derive(Debug)]
pub struct Hdf5Container {
    file: hdf5::File,
    datasets: Vec<hdf5::Dataset>,
}

impl RasterContainer for Hdf5Container {
    fn subdataset_count(&self) -> usize {
        self.datasets.len()
    }

    /// Flattened metadata lookup: `what_nodata` resolves to attribute
    /// `nodata` of group `/what`, with a plain root attribute as fallback.
    fn metadata_item(&self, key: &str) -> Option<String> {
        if let Some((group, attr)) = key.split_once('_') {
            if let Ok(group) = self.file.group(group) {
                if let Ok(attr) = group.attr(attr) {
                    if let Some(value) = read_scalar_attr(&attr) {
                        return Some(value);
                    }
                }
            }
        }
        let attr = self.file.attr(key).ok()?;
        read_scalar_attr(&attr)
    }

    fn read_subdataset(&self, index: usize) -> SourceResult<RasterBand> {
        let dataset = self
            .datasets
            .get(index)
            .ok_or(SourceError::SubdatasetIndex {
                index,
                count: self.datasets.len(),
            })?;

        let shape = dataset.shape();
        let raw = dataset
            .read_raw::<f64>()
            .map_err(|e| SourceError::ReadFailed(format!("{}: {}", dataset.name(), e)))?;
        let values = Array2::from_shape_vec((shape[0], shape[1]), raw)
            .map_err(|e| SourceError::ReadFailed(format!("{}: {}", dataset.name(), e)))?;

        Ok(RasterBand::from_values(values))
    }
}

fn collect_2d_datasets(group: &hdf5::Group, out: &mut Vec<hdf5::Dataset>) -> hdf5::Result<()> {
    for dataset in group.datasets()? {
        if dataset.shape().len() == 2 {
            out.push(dataset);
        }
    }
    for child in group.groups()? {
        collect_2d_datasets(&child, out)?;
    }
    Ok(())
}

/// Render a scalar attribute as text whatever its stored type.
fn read_scalar_attr(attr: &hdf5::Attribute) -> Option<String> {
    if let Ok(value) = attr.read_scalar::<f64>() {
        return Some(value.to_string());
    }
    if let Ok(value) = attr.read_scalar::<i64>() {
        return Some(value.to_string());
    }
    if let Ok(value) = attr.read_scalar::<hdf5::types::VarLenUnicode>() {
        return Some(value.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    use inca_common::GridDims;
    use tempfile::TempDir;

    /// Write a small archive-style file: `/what@nodata`, two 2x3 data
    /// planes under `/dataset1` and a 1-D axis dataset at the root.
    fn write_archive_file(path: &Path) -> hdf5::Result<()> {
        let file = hdf5::File::create(path)?;

        let what = file.create_group("what")?;
        what.new_attr::<f64>().create("nodata")?.write_scalar(&255.0)?;

        // Planes created out of name order; index order must come from
        // the sorted in-file paths, not from creation order.
        let planes = file.create_group("dataset1")?;
        write_plane(&planes, "data2", &[9.0; 6])?;
        write_plane(&planes, "data1", &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0])?;

        file.new_dataset_builder()
            .with_data(&[0.0_f64, 1.0, 2.0, 3.0][..])
            .create("levels")?;

        Ok(())
    }

    fn write_plane(group: &hdf5::Group, name: &str, flat: &[f64]) -> hdf5::Result<()> {
        let dataset = group.new_dataset::<f64>().shape((2, 3)).create(name)?;
        dataset.write_raw(flat)?;
        Ok(())
    }

    #[test]
    fn test_subdatasets_ordered_by_in_file_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("201905010000_wind_inca.h5");
        write_archive_file(&path).unwrap();

        let container = Hdf5Source::new().open(&path).unwrap();
        let first = container.read_subdataset(0).unwrap();
        let second = container.read_subdataset(1).unwrap();

        // data1 sorts before data2 even though data2 was written first.
        assert_eq!(first.values[[1, 2]], 12.0);
        assert_eq!(second.values[[1, 2]], 9.0);
        assert_eq!(first.dims, GridDims::new(3, 2));
    }

    #[test]
    fn test_one_dimensional_datasets_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fixture.h5");
        write_archive_file(&path).unwrap();

        let container = Hdf5Source::new().open(&path).unwrap();
        // The 1-D "levels" dataset is not a plane.
        assert_eq!(container.subdataset_count(), 2);
    }

    #[test]
    fn test_group_attribute_flattened_lookup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fixture.h5");
        write_archive_file(&path).unwrap();

        let container = Hdf5Source::new().open(&path).unwrap();
        assert_eq!(container.metadata_item("what_nodata").as_deref(), Some("255"));
        assert_eq!(container.metadata_item("what_gain"), None);
        assert_eq!(container.metadata_item("absent"), None);
    }

    #[test]
    fn test_root_attribute_fallback() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bare.h5");
        {
            let file = hdf5::File::create(&path).unwrap();
            file.new_attr::<f64>()
                .create("what_nodata")
                .unwrap()
                .write_scalar(&-1.0)
                .unwrap();
        }

        let container = Hdf5Source::new().open(&path).unwrap();
        assert_eq!(container.metadata_item("what_nodata").as_deref(), Some("-1"));
    }

    #[test]
    fn test_string_attribute_rendered_as_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tagged.h5");
        {
            let file = hdf5::File::create(&path).unwrap();
            let value: hdf5::types::VarLenUnicode = "INCA analysis".parse().unwrap();
            file.new_attr::<hdf5::types::VarLenUnicode>()
                .create("source")
                .unwrap()
                .write_scalar(&value)
                .unwrap();
        }

        let container = Hdf5Source::new().open(&path).unwrap();
        assert_eq!(container.metadata_item("source").as_deref(), Some("INCA analysis"));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fixture.h5");
        write_archive_file(&path).unwrap();

        let container = Hdf5Source::new().open(&path).unwrap();
        let err = container.read_subdataset(5).unwrap_err();
        assert!(matches!(
            err,
            SourceError::SubdatasetIndex { index: 5, count: 2 }
        ));
    }

    #[test]
    fn test_non_raster_file_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "plain text").unwrap();

        let err = Hdf5Source::new().open(&path).unwrap_err();
        assert!(matches!(err, SourceError::OpenContainer(_)));
    }
}
