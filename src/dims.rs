//! Closed-form grid dimensions derived from the icosahedral refinement
//! parameters.
//!
//! See <https://h3geo.org/docs/next/core-library/coordsystems> for the
//! equivalent subdivision scheme H3 uses on a hexagonal grid; NICAM instead
//! subdivides a base icosahedron directly and partitions the sphere into
//! `10 * 4^rlevel` square regions.

use crate::error::InvalidParameter;

/// Largest supported spread between `glevel` and `rlevel`.
///
/// Beyond this, `nmax * nmax` (`nmax = 2^(glevel - rlevel)`) would overflow a
/// 32-bit cell count.
const MAX_LEVEL_SPREAD: u8 = 30;

/// Refinement parameters of a NICAM icosahedral grid, and the scalars derived
/// from them.
///
/// `glevel` is the grid subdivision level; `rlevel` is the region subdivision
/// level, with the sphere partitioned into `lall = 10 * 4^rlevel` square
/// regions of `gall = (2^(glevel - rlevel) + 2)^2` cells each (including a
/// one-cell halo on every side).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    glevel: u8,
    rlevel: u8,
}

impl GridDims {
    /// Initializes grid dimensions from the refinement parameters.
    ///
    /// # Errors
    ///
    /// [`InvalidParameter`] if `glevel < rlevel` or if `glevel - rlevel`
    /// exceeds [`MAX_LEVEL_SPREAD`] (which would overflow `nmax^2`).
    pub fn new(glevel: u8, rlevel: u8) -> Result<Self, InvalidParameter> {
        if glevel < rlevel {
            return Err(InvalidParameter::new(
                format!("glevel={glevel}, rlevel={rlevel}"),
                "glevel must be >= rlevel",
            ));
        }
        if glevel - rlevel > MAX_LEVEL_SPREAD {
            return Err(InvalidParameter::new(
                format!("glevel={glevel}, rlevel={rlevel}"),
                "glevel - rlevel is too large, nmax^2 would overflow",
            ));
        }

        Ok(Self { glevel, rlevel })
    }

    /// Grid subdivision level.
    #[must_use]
    pub const fn glevel(self) -> u8 {
        self.glevel
    }

    /// Region subdivision level.
    #[must_use]
    pub const fn rlevel(self) -> u8 {
        self.rlevel
    }

    /// Number of interior cells per side of a region (`2^(glevel - rlevel)`).
    #[must_use]
    pub const fn nmax(self) -> u32 {
        1 << (self.glevel - self.rlevel)
    }

    /// Side length of a region in cells, halo included.
    #[must_use]
    pub const fn gall_1d(self) -> u32 {
        self.nmax() + 2
    }

    /// Cells per region, halo included.
    #[must_use]
    pub const fn gall(self) -> u32 {
        self.gall_1d() * self.gall_1d()
    }

    /// Interior cells per region (halo excluded).
    #[must_use]
    pub const fn gall_in(self) -> u32 {
        self.nmax() * self.nmax()
    }

    /// Total number of regions covering the sphere (`10 * 4^rlevel`).
    #[must_use]
    pub const fn lall(self) -> u32 {
        10 * 4u32.pow(self.rlevel as u32)
    }

    /// Linear index of interior or halo cell `(i, j)` within a region.
    #[must_use]
    pub const fn linear_index(self, i: u32, j: u32) -> usize {
        (self.gall_1d() * j + i) as usize
    }
}

#[cfg(test)]
#[path = "./dims_tests.rs"]
mod tests;
