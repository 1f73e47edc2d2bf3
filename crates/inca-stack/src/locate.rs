//! Discovery of per-slot archive files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, warn};

use inca_common::{DayStamp, Product, RASTER_EXT};

use crate::error::{Result, StackError};

/// Locate every slot file of `product` for `date` under `root`.
///
/// Returns one entry per slot in hour-ascending, sub-position-ascending
/// order: 24 entries for the hourly products, 150 for rain, fewer when
/// `hours` narrows the day. Slots without a file are `None`; gaps alone
/// never fail a call.
///
/// `hours` filters whole hour positions (rain sub-positions always travel
/// with their hour); values outside the product's range select nothing.
///
/// Fails with [`StackError::InvalidDate`] when the date token is
/// malformed, [`StackError::DirectoryNotFound`] when `root` is not a
/// directory and [`StackError::DuplicateFile`] when two discovered files
/// of this series share a basename.
pub fn locate(
    root: &Path,
    date: &str,
    product: Product,
    hours: Option<&[u8]>,
) -> Result<Vec<Option<PathBuf>>> {
    let day = DayStamp::parse(date)?;
    locate_slots(root, &day, product, hours)
}

/// Typed-date variant of [`locate`].
pub fn locate_day(
    root: &Path,
    day: NaiveDate,
    product: Product,
    hours: Option<&[u8]>,
) -> Result<Vec<Option<PathBuf>>> {
    locate_slots(root, &DayStamp::from_date(day), product, hours)
}

fn locate_slots(
    root: &Path,
    day: &DayStamp,
    product: Product,
    hours: Option<&[u8]>,
) -> Result<Vec<Option<PathBuf>>> {
    if !root.is_dir() {
        return Err(StackError::DirectoryNotFound(root.to_path_buf()));
    }

    let by_name = discover(root, day, product)?;

    let mut slots = Vec::new();
    for hour in 0..product.hour_positions() {
        if let Some(filter) = hours {
            if !filter.iter().any(|&h| h as usize == hour) {
                continue;
            }
        }
        for sub in 0..product.slots_per_hour() {
            let name = product.slot_filename(day, hour, sub);
            match by_name.get(name.as_str()) {
                Some(path) => slots.push(Some(path.clone())),
                None => {
                    warn!(file = %name, "Missing data, blank added");
                    slots.push(None);
                }
            }
        }
    }

    Ok(slots)
}

/// Walk `root` collecting this day's files of the series, keyed by
/// basename. Any basename seen twice is a hard error, wherever the two
/// files live in the tree.
fn discover(root: &Path, day: &DayStamp, product: Product) -> Result<HashMap<String, PathBuf>> {
    let prefix = day.compact();
    let ending = format!("{}.{}", product.suffix(), RASTER_EXT);

    let mut by_name: HashMap<String, PathBuf> = HashMap::new();
    for entry in walkdir::WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = match entry.file_name().to_str() {
            Some(name) => name,
            None => {
                debug!(path = %entry.path().display(), "Skipping non-UTF-8 file name");
                continue;
            }
        };
        if !(name.starts_with(&prefix) && name.ends_with(&ending)) {
            continue;
        }
        if let Some(first) = by_name.get(name) {
            return Err(StackError::DuplicateFile {
                first: first.clone(),
                second: entry.path().to_path_buf(),
            });
        }
        by_name.insert(name.to_string(), entry.path().to_path_buf());
    }

    Ok(by_name)
}
