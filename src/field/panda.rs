//! Adapts a [`crate::panda::PandaReader`] bound to one variable name to the
//! [`super::FieldReader`] dispatch surface.

use crate::error::Error;
use crate::panda::PandaReader;
use crate::value::GridArray;
use std::path::Path;

/// A panda container opened for reads of a single named variable.
///
/// The container itself multiplexes many variables and steps; this wrapper
/// exists so [`super::FieldReader::Panda`] can offer the same
/// `read(step, level)` shape as the legacy and NetCDF readers, with the
/// variable name fixed at construction instead of passed on every call.
pub struct PandaFieldReader {
    reader: PandaReader,
    varname: String,
}

impl PandaFieldReader {
    /// Opens `path` as a panda container and binds subsequent reads to
    /// `varname`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the file cannot be opened, its header or
    /// directory is malformed, or it declares an unsupported grid topology.
    pub fn open(path: impl AsRef<Path>, varname: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            reader: PandaReader::open(path)?,
            varname: varname.into(),
        })
    }

    /// The variable this reader is bound to.
    #[must_use]
    pub fn varname(&self) -> &str {
        &self.varname
    }

    /// The underlying container reader, for directory inspection or
    /// cross-file validation.
    #[must_use]
    pub fn reader(&self) -> &PandaReader {
        &self.reader
    }

    /// Reads the `level`-th vertical layer of this reader's variable at
    /// `step`, across every region in the container.
    ///
    /// # Errors
    ///
    /// See [`PandaReader::read_pe`].
    pub fn read(&self, step: u32, level: u32) -> Result<GridArray, Error> {
        self.reader.read_pe(&self.varname, step, level)
    }
}
