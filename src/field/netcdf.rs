//! NetCDF data file reading: a thin wrapper delegating parsing to the
//! `netcdf` crate, cropping the halo the same way the legacy reader does.

use crate::dims::GridDims;
use crate::error::{Error, FormatViolation, ShapeMismatch};
use crate::value::GridArray;
use ndarray::{s, Array2};
use std::path::{Path, PathBuf};

/// A NetCDF data file, bound to one `[step, level, cell]`-shaped variable.
#[derive(Clone, Debug)]
pub struct NetcdfFieldReader {
    dims: GridDims,
    path: PathBuf,
    varname: String,
}

impl NetcdfFieldReader {
    /// Initializes a reader of `varname` within `path`, for a region of the
    /// given refinement parameters.
    pub fn new(dims: GridDims, path: impl AsRef<Path>, varname: impl Into<String>) -> Self {
        Self {
            dims,
            path: path.as_ref().to_path_buf(),
            varname: varname.into(),
        }
    }

    /// Reads the `level`-th vertical level of `step`, halo cropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FormatViolation`] if the file or variable cannot be
    /// read, or [`Error::ShapeMismatch`] if the variable's innermost
    /// dimension does not match `gall`.
    pub fn read(&self, step: u32, level: u32) -> Result<GridArray, Error> {
        let file = netcdf::open(&self.path).map_err(|e| {
            FormatViolation::new(e.to_string(), "failed to open NetCDF data file")
        })?;
        let var = file.variable(&self.varname).ok_or_else(|| {
            FormatViolation::new(self.varname.clone(), "missing NetCDF variable")
        })?;

        let values = var
            .get_values::<f64, _>(..)
            .map_err(|e| FormatViolation::new(e.to_string(), "failed to read NetCDF variable"))?;

        let gall = self.dims.gall() as usize;
        if values.ndim() != 3 || values.shape()[2] != gall {
            return Err(ShapeMismatch::new(
                format!("shape={:?}, expected gall={gall}", values.shape()),
                "NetCDF variable is not shaped [step, level, cell]",
            )
            .into());
        }

        let tile = values.slice(s![step as usize, level as usize, ..]);
        let nmax = self.dims.nmax();

        let mut interior = Vec::with_capacity((nmax * nmax) as usize);
        for j in 1..=nmax {
            for i in 1..=nmax {
                interior.push(tile[self.dims.linear_index(i, j)]);
            }
        }

        let side = nmax as usize;
        let array = Array2::from_shape_vec((side, side), interior)
            .expect("cropped length matches gall_in");

        Ok(GridArray::Real8(array))
    }
}
