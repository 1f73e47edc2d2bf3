//! Raster container access behind a capability trait.
//!
//! The archive files are HDF5 containers holding one or two 2-D grids plus
//! ODIM-style metadata. Everything downstream consumes them through the
//! [`RasterSource`] / [`RasterContainer`] traits; [`MemorySource`] is the
//! synthetic implementation, [`native::Hdf5Source`] the on-disk one.

pub mod error;
pub mod memory;
#[cfg(feature = "hdf5")]
pub mod native;
pub mod source;

pub use error::{SourceError, SourceResult};
pub use memory::{MemoryContainer, MemorySource};
#[cfg(feature = "hdf5")]
pub use native::{Hdf5Container, Hdf5Source};
pub use source::{RasterBand, RasterContainer, RasterSource};
