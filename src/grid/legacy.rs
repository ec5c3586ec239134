//! Legacy (per-region) grid file decoding: Fortran sequential-access
//! records of big-endian `f64` arrays, one file per region.

use super::{GridSource, Region};
use crate::dims::GridDims;
use crate::error::{Error, ShapeMismatch};
use crate::io::{decode_f64_array, decode_i32_scalar, read_fortran_record};
use crate::vector::Vec3;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// A legacy grid file: one region's cell centers and dual-mesh vertices,
/// stored as six Fortran sequential-access records (see the module docs of
/// [`crate::grid`] for the overall layout).
///
/// # Record layout
///
/// 1. A single `i32`, the region's `gall` (cross-checked against `dims`).
/// 2. Three `f64[gall]` records, the `x`, `y`, `z` components of `grd_x`.
/// 3. Three `f64[2 * gall]` records, the `x`, `y`, `z` components of
///    `grd_xt`; each record holds the TI row (`gall` values) followed by
///    the TJ row (`gall` values).
#[derive(Clone, Debug)]
pub struct LegacyGridSource {
    dims: GridDims,
    path: PathBuf,
}

impl LegacyGridSource {
    /// Initializes a source reading `path` as a region of the given
    /// refinement parameters.
    pub fn new(dims: GridDims, path: impl AsRef<Path>) -> Self {
        Self {
            dims,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl GridSource for LegacyGridSource {
    fn dims(&self) -> GridDims {
        self.dims
    }

    fn load(&self) -> Result<Region, Error> {
        let file = File::open(&self.path)?;
        let mut reader = BufReader::new(file);
        let gall = self.dims.gall() as usize;

        let gall_record = read_fortran_record(&mut reader)?;
        let declared_gall = decode_i32_scalar(&gall_record)?;
        if usize::try_from(declared_gall) != Ok(gall) {
            return Err(ShapeMismatch::new(
                format!("file declares gall={declared_gall}"),
                "legacy grid file's gall does not match glevel/rlevel",
            )
            .into());
        }

        let mut center_axes = [Vec::new(), Vec::new(), Vec::new()];
        for axis in &mut center_axes {
            let record = read_fortran_record(&mut reader)?;
            *axis = decode_f64_array(&record, gall)?;
        }

        let mut vertex_axes = [Vec::new(), Vec::new(), Vec::new()];
        for axis in &mut vertex_axes {
            let record = read_fortran_record(&mut reader)?;
            *axis = decode_f64_array(&record, 2 * gall)?;
        }

        let centers = (0..gall)
            .map(|ij| Vec3::new(center_axes[0][ij], center_axes[1][ij], center_axes[2][ij]))
            .collect();

        let vertices = (0..gall)
            .map(|ij| {
                let ti = Vec3::new(
                    vertex_axes[0][ij],
                    vertex_axes[1][ij],
                    vertex_axes[2][ij],
                );
                let tj = Vec3::new(
                    vertex_axes[0][gall + ij],
                    vertex_axes[1][gall + ij],
                    vertex_axes[2][gall + ij],
                );
                [ti, tj]
            })
            .collect();

        Region::new(self.dims, centers, vertices)
    }
}

#[cfg(test)]
#[path = "./legacy_tests.rs"]
mod tests;
