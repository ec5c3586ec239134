//! Grid geometry: triangle-vertex synthesis, per-cell polygon assembly, and
//! the sources a region's raw cell centers can be loaded from.

mod legacy;
#[cfg(feature = "netcdf")]
mod netcdf;
mod polygon;
mod synth;

pub use legacy::LegacyGridSource;
#[cfg(feature = "netcdf")]
pub use netcdf::NetcdfGridSource;
pub use polygon::CellPolygon;

use crate::coord::LatLon;
use crate::dims::GridDims;
use crate::error::Error;
use crate::vector::Vec3;

/// Supplies a region's raw cell centers (and, optionally, its dual-mesh
/// vertices) from some underlying storage.
///
/// Implementations decode one region at a time; orchestrating a read across
/// all `lall` regions of a grid is left to the caller.
pub trait GridSource {
    /// Refinement parameters of the region this source reads.
    fn dims(&self) -> GridDims;

    /// Loads the region.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the underlying storage cannot be read or does
    /// not match `self.dims()`.
    fn load(&self) -> Result<Region, Error>;
}

/// One region's cell centers, dual-mesh vertices, and assembled polygons.
#[derive(Clone, Debug)]
pub struct Region {
    dims: GridDims,
    centers: Vec<Vec3>,
    vertices: Vec<[Vec3; 2]>,
}

impl Region {
    /// Builds a region from centers and dual-mesh vertices that are both
    /// already known (the legacy grid file format supplies both directly).
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if either array's length does not match
    /// `dims.gall()`.
    pub fn new(dims: GridDims, centers: Vec<Vec3>, vertices: Vec<[Vec3; 2]>) -> Result<Self, Error> {
        let expected = dims.gall() as usize;
        if centers.len() != expected {
            return Err(crate::error::ShapeMismatch::new(
                format!("centers.len()={}", centers.len()),
                "center count does not match gall",
            )
            .into());
        }
        if vertices.len() != expected {
            return Err(crate::error::ShapeMismatch::new(
                format!("vertices.len()={}", vertices.len()),
                "vertex count does not match gall",
            )
            .into());
        }

        Ok(Self {
            dims,
            centers,
            vertices,
        })
    }

    /// Builds a region from centers alone, synthesizing the dual-mesh
    /// vertices via great-circle centroid averaging.
    ///
    /// # Errors
    ///
    /// [`Error::ShapeMismatch`] if `centers.len()` does not match
    /// `dims.gall()`.
    pub fn synthesize(dims: GridDims, centers: Vec<Vec3>) -> Result<Self, Error> {
        let expected = dims.gall() as usize;
        if centers.len() != expected {
            return Err(crate::error::ShapeMismatch::new(
                format!("centers.len()={}", centers.len()),
                "center count does not match gall",
            )
            .into());
        }

        let vertices = synth::synthesize(&centers, dims);
        Ok(Self {
            dims,
            centers,
            vertices,
        })
    }

    /// Refinement parameters of this region.
    #[must_use]
    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    /// Cell centers, halo included (`gall` entries, row-major).
    #[must_use]
    pub fn centers(&self) -> &[Vec3] {
        &self.centers
    }

    /// Dual-mesh `[TI, TJ]` vertex pairs, halo included (`gall` entries,
    /// row-major).
    #[must_use]
    pub fn vertices(&self) -> &[[Vec3; 2]] {
        &self.vertices
    }

    /// Latitude/longitude of every interior cell center (`gall_in` entries,
    /// row-major in `(i, j)` with both in `1..=nmax`).
    #[must_use]
    pub fn interior_latlon(&self) -> Vec<LatLon> {
        let nmax = self.dims.nmax();
        let idx = |i: u32, j: u32| self.dims.linear_index(i, j);

        let mut out = Vec::with_capacity(self.dims.gall_in() as usize);
        for j in 1..=nmax {
            for i in 1..=nmax {
                out.push(LatLon::from_xyz(self.centers[idx(i, j)]));
            }
        }
        out
    }

    /// Assembles the hexagon/pentagon polygon of every interior cell
    /// (`gall_in` entries, in the same row-major order as
    /// [`Region::interior_latlon`]).
    #[must_use]
    pub fn polygons(&self) -> Vec<CellPolygon> {
        polygon::assemble(&self.vertices, self.dims)
    }

    /// Surface area of every interior cell on a sphere of the given
    /// `radius`, by fan-triangulating each assembled polygon from its own
    /// center and summing [`crate::vector::triangle_area`] over the fan
    /// (`gall_in` entries, in the same row-major order as
    /// [`Region::polygons`]).
    #[must_use]
    pub fn cell_areas(&self, radius: f64) -> Vec<f64> {
        let nmax = self.dims.nmax();
        let idx = |i: u32, j: u32| self.dims.linear_index(i, j);
        let polygons = self.polygons();

        let mut areas = Vec::with_capacity(polygons.len());
        let mut k = 0usize;
        for j in 1..=nmax {
            for i in 1..=nmax {
                let center = self.centers[idx(i, j)];
                let polygon = &polygons[k];
                k += 1;

                let mut area = 0.0;
                for edge in 0..polygon.len() {
                    let a = polygon[edge].to_xyz();
                    let b = polygon[(edge + 1) % polygon.len()].to_xyz();
                    area += crate::vector::triangle_area(center, a, b, radius);
                }
                areas.push(area);
            }
        }
        areas
    }
}

#[cfg(test)]
#[path = "./mod_tests.rs"]
mod tests;
