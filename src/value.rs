//! Dtype-tagged numeric arrays returned by field readers.
//!
//! The legacy data format only ever holds `f32`; panda payloads may declare
//! any of four element types. Both funnel through the same enum so callers
//! have one type to match on regardless of which reader produced it.

use ndarray::Array2;

/// Numeric values sampled at a set of grid cells, tagged by the on-disk
/// element type they were decoded from.
///
/// For a ravelled read — every panda read, and a legacy read with
/// [`crate::field::OutputShape::OneD`] — shape is `(regions, cells)`: one
/// row per region, one column per cell, with single-region readers (the
/// legacy format) reporting a single row. A legacy read with
/// [`crate::field::OutputShape::TwoD`] instead reports a spatial
/// `(gall_1d, gall_1d)` or `(nmax, nmax)` tile through the same variant;
/// [`GridArray::num_regions`]/[`GridArray::cells_per_region`] do not apply
/// to that shape and must not be called on it.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum GridArray {
    /// 4-byte IEEE 754 floats (`FIO_REAL4`).
    Real4(Array2<f32>),
    /// 8-byte IEEE 754 floats (`FIO_REAL8`).
    Real8(Array2<f64>),
    /// 4-byte signed integers (`FIO_INTEGER4`).
    Int4(Array2<i32>),
    /// 8-byte signed integers (`FIO_INTEGER8`).
    Int8(Array2<i64>),
}

impl GridArray {
    /// Number of regions (rows).
    ///
    /// Only meaningful for a ravelled `(regions, cells)` read; see the
    /// type-level docs.
    #[must_use]
    pub fn num_regions(&self) -> usize {
        match self {
            Self::Real4(a) => a.nrows(),
            Self::Real8(a) => a.nrows(),
            Self::Int4(a) => a.nrows(),
            Self::Int8(a) => a.nrows(),
        }
    }

    /// Number of cells per region (columns).
    ///
    /// Only meaningful for a ravelled `(regions, cells)` read; see the
    /// type-level docs.
    #[must_use]
    pub fn cells_per_region(&self) -> usize {
        match self {
            Self::Real4(a) => a.ncols(),
            Self::Real8(a) => a.ncols(),
            Self::Int4(a) => a.ncols(),
            Self::Int8(a) => a.ncols(),
        }
    }
}

#[cfg(test)]
#[path = "./value_tests.rs"]
mod tests;
