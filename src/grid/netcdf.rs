//! NetCDF grid file decoding: reads cell-center longitude/latitude and
//! delegates triangle-vertex synthesis to [`super::synth`].
//!
//! Parsing the NetCDF container itself is delegated to the `netcdf` crate;
//! this module only knows the two variable names NICAM stores degrees in
//! and the unit conversion into this crate's cartesian representation.

use super::{GridSource, Region};
use crate::dims::GridDims;
use crate::error::{Error, FormatViolation, ShapeMismatch};
use crate::{coord::LatLon, vector::Vec3};
use std::path::{Path, PathBuf};

/// Name of the longitude variable NICAM's NetCDF grid files store, in
/// degrees.
const LON_VAR: &str = "ICO_node_x";

/// Name of the latitude variable NICAM's NetCDF grid files store, in
/// degrees.
const LAT_VAR: &str = "ICO_node_y";

/// A NetCDF grid file supplying only cell centers; `grd_xt` is synthesized
/// by [`super::synth::synthesize`].
#[derive(Clone, Debug)]
pub struct NetcdfGridSource {
    dims: GridDims,
    path: PathBuf,
    radius: f64,
}

impl NetcdfGridSource {
    /// Initializes a source reading `path` as a region of the given
    /// refinement parameters, scaling decoded centers to `radius`.
    pub fn new(dims: GridDims, path: impl AsRef<Path>, radius: f64) -> Self {
        Self {
            dims,
            path: path.as_ref().to_path_buf(),
            radius,
        }
    }

    fn read_degrees(file: &netcdf::File, name: &str) -> Result<Vec<f64>, Error> {
        let var = file.variable(name).ok_or_else(|| {
            FormatViolation::new(name.to_owned(), "missing required NetCDF variable")
        })?;
        let values = var
            .get_values::<f64, _>(..)
            .map_err(|e| FormatViolation::new(e.to_string(), "failed to read NetCDF variable"))?;
        Ok(values)
    }
}

impl GridSource for NetcdfGridSource {
    fn dims(&self) -> GridDims {
        self.dims
    }

    fn load(&self) -> Result<Region, Error> {
        let file = netcdf::open(&self.path).map_err(|e| {
            FormatViolation::new(e.to_string(), "failed to open NetCDF grid file")
        })?;

        let lon_deg = Self::read_degrees(&file, LON_VAR)?;
        let lat_deg = Self::read_degrees(&file, LAT_VAR)?;

        let expected = self.dims.gall() as usize;
        if lon_deg.len() != expected || lat_deg.len() != expected {
            return Err(ShapeMismatch::new(
                format!("lon={}, lat={}, expected={expected}", lon_deg.len(), lat_deg.len()),
                "NetCDF grid variable length does not match glevel/rlevel",
            )
            .into());
        }

        let centers: Vec<Vec3> = lon_deg
            .into_iter()
            .zip(lat_deg)
            .map(|(lon, lat)| LatLon::from_degrees(lat, lon).to_xyz().scale(self.radius))
            .collect();

        Region::synthesize(self.dims, centers)
    }
}
