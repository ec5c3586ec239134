//! Assembly of per-cell hexagon/pentagon polygons from the dual-mesh
//! vertices produced by [`super::synth`].

use crate::coord::LatLon;
use crate::dims::GridDims;
use crate::grid::synth::{TI, TJ};
use crate::vector::Vec3;
use std::ops::Deref;

/// Largest vertex count a cell polygon can have: six, for an interior
/// hexagonal cell.
const MAX_POLYGON_VERTS: usize = 6;

/// The closed polygon bounding one grid cell: a hexagon for ordinary cells,
/// a pentagon for the twelve icosahedron vertices.
///
/// Vertices are listed in winding order with no explicit closing repeat of
/// the first point. Unused slots beyond `len` are zeroed and excluded by
/// [`Deref`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPolygon {
    verts: [LatLon; MAX_POLYGON_VERTS],
    len: u8,
}

impl CellPolygon {
    fn from_raw(raw: [Vec3; MAX_POLYGON_VERTS]) -> Self {
        let mut verts = [LatLon::default(); MAX_POLYGON_VERTS];
        let mut len = 0usize;

        for v in raw {
            let ll = LatLon::from_xyz(v);
            let duplicate = len > 0 && ll == verts[len - 1];
            if !duplicate {
                verts[len] = ll;
                len += 1;
            }
        }
        // A pentagon's collapsed corner can make the first and last entries
        // coincide too, once the loop above has deduplicated consecutive
        // runs.
        if len > 1 && verts[len - 1] == verts[0] {
            len -= 1;
        }

        Self {
            verts,
            #[allow(clippy::cast_possible_truncation, reason = "len <= 6")]
            len: len as u8,
        }
    }

    /// Number of vertices: 6 for a hexagon, 5 for a pentagon.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`: every cell has at least five vertices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Deref for CellPolygon {
    type Target = [LatLon];

    fn deref(&self) -> &Self::Target {
        &self.verts[..self.len()]
    }
}

#[cfg(feature = "geo")]
impl From<CellPolygon> for geo_types::Polygon<f64> {
    fn from(value: CellPolygon) -> Self {
        let mut coords: Vec<geo_types::Coord<f64>> =
            value.iter().copied().map(Into::into).collect();
        if let Some(first) = coords.first().copied() {
            coords.push(first);
        }

        Self::new(geo_types::LineString::new(coords), Vec::new())
    }
}

/// Assembles the polygon for every interior cell of a region.
///
/// `vertices` is `grd_xt` as produced by [`super::synth::synthesize`]:
/// one `[TI, TJ]` pair per cell, addressed via [`GridDims::linear_index`].
/// The result holds one [`CellPolygon`] per interior cell (`gall_in`
/// entries, row-major in `(i, j)` with `i, j` both in `1..=nmax`).
///
/// Each interior cell `(i, j)` reads the six triangle vertices that
/// surround its center from the four neighboring quads: two from
/// `(i-1, j-1)`, one each from `(i, j-1)`, `(i, j)` (twice), and
/// `(i-1, j)`. Consecutive duplicates collapse a hexagon down to the
/// pentagon of the twelve icosahedron-vertex cells.
#[must_use]
pub(crate) fn assemble(vertices: &[[Vec3; 2]], dims: GridDims) -> Vec<CellPolygon> {
    let gall_1d = dims.gall_1d();
    let idx = |i: u32, j: u32| dims.linear_index(i, j);
    let nmax = dims.nmax();

    let mut polygons = Vec::with_capacity(dims.gall_in() as usize);

    for j in 1..=nmax {
        for i in 1..=nmax {
            debug_assert!(i < gall_1d - 1 && j < gall_1d - 1);

            let raw = [
                vertices[idx(i - 1, j - 1)][TJ],
                vertices[idx(i - 1, j - 1)][TI],
                vertices[idx(i, j - 1)][TJ],
                vertices[idx(i, j)][TI],
                vertices[idx(i, j)][TJ],
                vertices[idx(i - 1, j)][TI],
            ];

            polygons.push(CellPolygon::from_raw(raw));
        }
    }

    polygons
}

#[cfg(test)]
#[path = "./polygon_tests.rs"]
mod tests;
