//! Locate and stack hourly weather analysis rasters.
//!
//! One day of the archive is a directory tree of per-slot HDF5 files named
//! `<YYYYMMDD><HHM>0_<suffix>.h5`. [`locate`] maps a day and product to
//! the ordered slot paths, tolerating gaps; [`stack`] reads the paths
//! through a [`raster_source::RasterSource`] into a `(width, height,
//! slot)` array with one sentinel value covering everything missing,
//! unreadable or flagged no-data.
//!
//! ```no_run
//! use inca_stack::{load_field, Field};
//! use raster_source::MemorySource;
//!
//! # fn main() -> Result<(), inca_stack::StackError> {
//! let source = MemorySource::new();
//! let cube = load_field(
//!     &source,
//!     "/data/archive".as_ref(),
//!     "2020-03-01",
//!     Field::Temperature,
//!     None,
//! )?;
//! assert_eq!(cube.dim().2, 24);
//! # Ok(())
//! # }
//! ```

pub mod daily;
pub mod error;
pub mod load;
pub mod locate;
pub mod stack;

pub use daily::sum_rain_by_day;
pub use error::{Result, StackError};
pub use load::{load_field, load_field_day};
pub use locate::{locate, locate_day};
pub use stack::{stack, NODATA_KEY};

// Vocabulary re-exports so callers rarely need inca-common directly.
pub use inca_common::{DayStamp, Field, GridDims, Product, NODATA};
