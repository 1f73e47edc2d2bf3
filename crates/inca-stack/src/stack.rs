//! Stacking located slot files into a 3-D array.

use std::path::{Path, PathBuf};

use ndarray::{s, Array2, Array3};
use tracing::{debug, warn};

use inca_common::GridDims;
use raster_source::{RasterContainer, RasterSource, SourceResult};

use crate::error::{Result, StackError};

/// Container metadata key naming the in-file no-data marker.
pub const NODATA_KEY: &str = "what_nodata";

/// Stack the located slots into a `(width, height, slot)` array.
///
/// Each slot is read independently: a `None` slot, an unopenable container
/// or a failed sub-dataset read leaves its layer filled with `nodata` and
/// is logged, never fatal on its own. The first readable grid fixes the
/// reference dimensions; any later grid of a different size aborts with
/// [`StackError::SizeMismatch`]. When no slot yields a grid the call fails
/// with [`StackError::NoValidData`].
///
/// Cells equal to the container's `what_nodata` marker are replaced with
/// `nodata`, so one sentinel covers in-file flags, unreadable slots and
/// gaps alike.
pub fn stack<S: RasterSource>(
    source: &S,
    slots: &[Option<PathBuf>],
    band_index: usize,
    nodata: f64,
) -> Result<Array3<f64>> {
    let mut layers: Vec<Option<Array2<f64>>> = Vec::with_capacity(slots.len());
    let mut reference: Option<GridDims> = None;

    for (index, slot) in slots.iter().enumerate() {
        let path = match slot {
            Some(path) => path,
            None => {
                layers.push(None);
                continue;
            }
        };

        let (dims, values) = match read_band(source, path, band_index, nodata) {
            Ok(band) => band,
            Err(e) => {
                warn!(
                    slot = index,
                    path = %path.display(),
                    error = %e,
                    "Unreadable slot, blank added"
                );
                layers.push(None);
                continue;
            }
        };

        match reference {
            None => reference = Some(dims),
            Some(expected) if expected != dims => {
                return Err(StackError::SizeMismatch {
                    expected,
                    found: dims,
                    path: path.clone(),
                });
            }
            Some(_) => {}
        }

        layers.push(Some(values));
    }

    let dims = reference.ok_or(StackError::NoValidData)?;

    let mut cube = Array3::from_elem((dims.width, dims.height, slots.len()), nodata);
    for (index, layer) in layers.iter().enumerate() {
        if let Some(values) = layer {
            // Row-major (height, width) layers transpose into the
            // (width, height, slot) cube.
            cube.slice_mut(s![.., .., index]).assign(&values.t());
        }
    }

    Ok(cube)
}

/// Open one slot and read its sub-dataset, substituting the container's
/// no-data marker with `nodata`.
fn read_band<S: RasterSource>(
    source: &S,
    path: &Path,
    band_index: usize,
    nodata: f64,
) -> SourceResult<(GridDims, Array2<f64>)> {
    let container = source.open(path)?;
    let band = container.read_subdataset(band_index)?;
    let dims = band.dims;
    let mut values = band.values;

    match container.metadata_item(NODATA_KEY) {
        Some(marker) => match marker.trim().parse::<f64>() {
            Ok(marker) => {
                values.mapv_inplace(|v| if v == marker { nodata } else { v });
            }
            Err(_) => {
                debug!(
                    path = %path.display(),
                    marker = %marker,
                    "Unparseable no-data marker, values kept"
                );
            }
        },
        None => {
            debug!(path = %path.display(), "No-data marker absent, values kept");
        }
    }

    Ok((dims, values))
}
