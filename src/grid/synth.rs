//! Great-circle centroid averaging: derives a dual-mesh vertex (one per
//! triangle orientation, per cell) from the primal cell centers.

use crate::dims::GridDims;
use crate::vector::Vec3;

/// Dual-mesh triangle orientations. `TI` is the lower-right triangle of a
/// cell's quad, `TJ` the upper-left.
pub(crate) const TI: usize = 0;
pub(crate) const TJ: usize = 1;

/// Computes `grd_xt`: one vertex per triangle orientation, per cell.
///
/// `centers` holds one [`Vec3`] per cell of a `gall_1d * gall_1d` region
/// (halo included), addressed via [`GridDims::linear_index`]. The result has
/// the same length and addressing.
///
/// Every interior triangle vertex is the great-circle centroid of the three
/// cell centers that surround it, found by summing each edge's rotation
/// vector (direction `a × b`, magnitude the angle between `a` and `b`) and
/// renormalizing. Two of the region's four corner cells need a seam fix-up
/// first: their trail of neighbor centers runs past the region's own halo,
/// so the missing triangle is borrowed from the other orientation at the
/// same cell instead of left unset.
pub(crate) fn synthesize(centers: &[Vec3], dims: GridDims) -> Vec<[Vec3; 2]> {
    let gall_1d = dims.gall_1d();
    let gall = dims.gall() as usize;
    let idx = |i: u32, j: u32| dims.linear_index(i, j);

    let zero = Vec3::new(0.0, 0.0, 0.0);
    let mut trail = vec![[[zero; 4], [zero; 4]]; gall];

    for j in 0..(gall_1d - 1) {
        for i in 0..(gall_1d - 1) {
            let ij = idx(i, j);
            let c00 = centers[ij];
            let c10 = centers[idx(i + 1, j)];
            let c11 = centers[idx(i + 1, j + 1)];
            let c01 = centers[idx(i, j + 1)];

            trail[ij][TI] = [c00, c10, c11, c00];
            trail[ij][TJ] = [c00, c11, c01, c00];
        }
    }

    // Seam fix-up: the two corners whose trail would otherwise run off the
    // filled range borrow the other orientation's trail at the same cell.
    let seam_a = idx(gall_1d - 1, 0);
    trail[seam_a][TI] = trail[seam_a][TJ];
    let seam_b = idx(0, gall_1d - 1);
    trail[seam_b][TJ] = trail[seam_b][TI];

    // Pentagonal corner (tentative, matches upstream): the bottom-left
    // corner's TI trail is borrowed from its neighbor's TJ trail instead of
    // computed directly, since one of the five pentagon regions collapses a
    // quad into a triangle there.
    let corner = idx(0, 0);
    let corner_neighbor = idx(1, 0);
    trail[corner][TI] = trail[corner_neighbor][TJ];

    let mut vertices = vec![[zero; 2]; gall];
    for j in 0..gall_1d {
        for i in 0..gall_1d {
            let ij = idx(i, j);
            for t in [TI, TJ] {
                vertices[ij][t] = great_circle_centroid(&trail[ij][t]);
            }
        }
    }

    vertices
}

/// Sums the rotation vector of each edge in the closed `path` (4 points,
/// first repeated as last) and renormalizes to a unit vector.
fn great_circle_centroid(path: &[Vec3; 4]) -> Vec3 {
    let mut sum = Vec3::new(0.0, 0.0, 0.0);

    for pair in path.windows(2) {
        let (p, q) = (pair[0], pair[1]);
        let axis = p.cross(q);
        let sin_theta = axis.norm();
        if sin_theta > 0.0 {
            let theta = sin_theta.atan2(p.dot(q));
            sum += axis.scale(theta / sin_theta);
        }
    }

    sum.normalized()
}

#[cfg(test)]
#[path = "./synth_tests.rs"]
mod tests;
