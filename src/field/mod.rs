//! Numeric field readers: sampling `(step, level)` slices of grid-cell
//! values from the legacy, NetCDF, and panda storage backends.
//!
//! The three backends have little in common beyond "one reader, one
//! (step, level) request, one array back out" — legacy files hold a single
//! un-named variable per file with configurable halo/shape options, panda
//! files multiplex many named variables with their own dtype each, and
//! NetCDF reading is delegated to the `netcdf` crate. Rather than force
//! them behind one trait, [`FieldReader`] is a tagged union: each variant
//! owns its handle, and dispatch is a match instead of a vtable call.

mod legacy;
#[cfg(feature = "netcdf")]
mod netcdf;
mod panda;

pub use legacy::{Access, LegacyFieldReader, OutputShape, ReadOptions};
#[cfg(feature = "netcdf")]
pub use netcdf::NetcdfFieldReader;
pub use panda::PandaFieldReader;

use crate::error::Error;
use crate::value::GridArray;

/// A numeric field reader over one of the three NICAM output backends.
pub enum FieldReader {
    /// A legacy single-variable, single-region data file.
    Legacy(LegacyFieldReader),
    /// A NetCDF data file, read via the `netcdf` crate.
    #[cfg(feature = "netcdf")]
    Netcdf(NetcdfFieldReader),
    /// A panda container, bound to one of its named variables.
    Panda(PandaFieldReader),
}

impl FieldReader {
    /// Reads the values sampled at vertical level `level` of step `step`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on I/O failure, on a `(step, level)` absent from
    /// the backend's directory, or if the backend's declared shape does not
    /// match its actual payload size.
    pub fn read(&self, step: u32, level: u32) -> Result<GridArray, Error> {
        match self {
            Self::Legacy(reader) => reader.read(step, level),
            #[cfg(feature = "netcdf")]
            Self::Netcdf(reader) => reader.read(step, level),
            Self::Panda(reader) => reader.read(step, level),
        }
    }
}

#[cfg(test)]
#[path = "./mod_tests.rs"]
mod tests;
