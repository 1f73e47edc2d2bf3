//! Typed field loading, locate plus stack in one call.

use std::path::Path;

use chrono::NaiveDate;
use ndarray::Array3;

use inca_common::Field;
use raster_source::RasterSource;

use crate::error::Result;
use crate::locate::{locate, locate_day};
use crate::stack::stack;

/// Locate and stack one field of `date` under `root`.
///
/// `hours` narrows the day to the given hour positions; `None` loads the
/// whole day. The wind components load from the same files and differ only
/// in the sub-dataset they read.
pub fn load_field<S: RasterSource>(
    source: &S,
    root: &Path,
    date: &str,
    field: Field,
    hours: Option<&[u8]>,
) -> Result<Array3<f64>> {
    let slots = locate(root, date, field.product(), hours)?;
    stack(source, &slots, field.band_index(), field.nodata())
}

/// Typed-date variant of [`load_field`].
pub fn load_field_day<S: RasterSource>(
    source: &S,
    root: &Path,
    day: NaiveDate,
    field: Field,
    hours: Option<&[u8]>,
) -> Result<Array3<f64>> {
    let slots = locate_day(root, day, field.product(), hours)?;
    stack(source, &slots, field.band_index(), field.nodata())
}
