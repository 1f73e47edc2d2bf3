//! Daily precipitation totals.

use std::path::Path;

use ndarray::{s, Array2};

use inca_common::Field;
use raster_source::RasterSource;

use crate::error::Result;
use crate::locate::locate;
use crate::stack::stack;

/// Total rainfall per cell for one day.
///
/// Locates and stacks all 150 ten-minute rain slots, then sums the slot
/// axis per cell, skipping sentinel values. A cell with no valid value in
/// any slot stays at the sentinel. Output shape `(width, height)`.
pub fn sum_rain_by_day<S: RasterSource>(
    source: &S,
    root: &Path,
    date: &str,
) -> Result<Array2<f64>> {
    let field = Field::Rain;
    let nodata = field.nodata();

    let slots = locate(root, date, field.product(), None)?;
    let cube = stack(source, &slots, field.band_index(), nodata)?;

    let (width, height, _) = cube.dim();
    let mut total = Array2::from_elem((width, height), nodata);
    for ((x, y), out) in total.indexed_iter_mut() {
        let mut sum = 0.0;
        let mut seen = false;
        for &value in cube.slice(s![x, y, ..]).iter() {
            if value != nodata {
                sum += value;
                seen = true;
            }
        }
        if seen {
            *out = sum;
        }
    }

    Ok(total)
}
