//! Shared vocabulary for the hourly analysis stacking crates.

pub mod date;
pub mod grid;
pub mod product;

pub use date::{DayStamp, DayStampError};
pub use grid::GridDims;
pub use product::{Field, Product, UnknownProductError, NODATA, RASTER_EXT};
