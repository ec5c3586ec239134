//! Legacy data file decoding: plain (or Fortran-sequential framed)
//! big-endian `f32` arrays, laid out `[step][level][cell]` for a single
//! region.

use crate::dims::GridDims;
use crate::error::Error;
use crate::value::GridArray;
use byteorder::BigEndian;
use memmap2::{Mmap, MmapOptions};
use ndarray::Array2;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Whether step blocks carry a 4-byte Fortran sequential-access record
/// prefix, or are laid out back-to-back with no framing at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// No per-record framing; steps are laid out back-to-back.
    Direct,
    /// Each step is prefixed by a 4-byte record-length marker.
    Sequential,
}

/// Whether a read returns its cells ravelled into one row, or as a 2-D
/// tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputShape {
    /// A single-row array of the (optionally halo-included) cells.
    OneD,
    /// A `gall_1d`-square (or halo-cropped) 2-D tile.
    TwoD,
}

/// Read-time configuration for [`LegacyFieldReader`]; see §4.6 of the
/// format notes for the option table this mirrors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadOptions {
    /// Per-step record framing.
    pub access: Access,
    /// Ravelled vs. tiled output.
    pub output_shape: OutputShape,
    /// Whether the halo ring is retained in the output.
    pub output_halo: bool,
}

impl Default for ReadOptions {
    /// Direct access, ravelled 1-D output, halo cropped — the common case
    /// for client code that only wants interior-cell values.
    fn default() -> Self {
        Self {
            access: Access::Direct,
            output_shape: OutputShape::OneD,
            output_halo: false,
        }
    }
}

/// A legacy data file: big-endian `f32` values for one region, addressed
/// by `(step, level)`.
#[derive(Clone, Debug)]
pub struct LegacyFieldReader {
    dims: GridDims,
    kall: u32,
    path: PathBuf,
    options: ReadOptions,
}

impl LegacyFieldReader {
    /// Initializes a reader of `path`, a legacy data file of `kall`
    /// vertical levels per step for a region of the given refinement
    /// parameters.
    pub fn new(dims: GridDims, kall: u32, path: impl AsRef<Path>, options: ReadOptions) -> Self {
        Self {
            dims,
            kall,
            path: path.as_ref().to_path_buf(),
            options,
        }
    }

    /// Refinement parameters of the region this reader reads.
    #[must_use]
    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    fn open_mmap(&self) -> Result<Mmap, Error> {
        let file = File::open(&self.path)?;
        // SAFETY: the mapping is read-only and this reader does not assume
        // the backing file is free of concurrent writers; a race would at
        // worst surface as garbled values, never as unsound memory access.
        #[allow(unsafe_code, reason = "memory-mapped read-only file access")]
        let mmap = unsafe { MmapOptions::new().map(&file)? };
        Ok(mmap)
    }

    /// Reads the `level`-th vertical level of `step`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or does not hold
    /// enough bytes for the requested slice.
    pub fn read(&self, step: u32, level: u32) -> Result<GridArray, Error> {
        let gall = self.dims.gall() as usize;
        let record_bytes = gall * 4;

        let (prefix, step_stride) = match self.options.access {
            Access::Direct => (0usize, self.kall as usize * record_bytes),
            Access::Sequential => (4usize, 4 + self.kall as usize * record_bytes),
        };
        let offset =
            step as usize * step_stride + prefix + level as usize * record_bytes;

        let mmap = self.open_mmap()?;
        let end = offset + record_bytes;
        if end > mmap.len() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "legacy data file is shorter than the requested (step, level) slice",
            )
            .into());
        }

        let mut tile = vec![0.0_f32; gall];
        BigEndian::read_f32_into(&mmap[offset..end], &mut tile);

        let gall_1d = self.dims.gall_1d();
        let nmax = self.dims.nmax();
        let array = match (self.options.output_shape, self.options.output_halo) {
            (OutputShape::OneD, true) => Array2::from_shape_vec((1, tile.len()), tile)
                .expect("tile length matches gall"),
            (OutputShape::OneD, false) => {
                let interior = crop_interior(&tile, gall_1d, nmax);
                let n = interior.len();
                Array2::from_shape_vec((1, n), interior).expect("cropped length matches gall_in")
            }
            (OutputShape::TwoD, true) => {
                let side = gall_1d as usize;
                Array2::from_shape_vec((side, side), tile).expect("tile length matches gall")
            }
            (OutputShape::TwoD, false) => {
                let interior = crop_interior(&tile, gall_1d, nmax);
                let side = nmax as usize;
                Array2::from_shape_vec((side, side), interior)
                    .expect("cropped length matches gall_in")
            }
        };

        Ok(GridArray::Real4(array))
    }
}

/// Crops the one-cell halo ring from a `gall_1d x gall_1d` row-major tile,
/// returning the `nmax x nmax` interior, ravelled.
fn crop_interior(tile: &[f32], gall_1d: u32, nmax: u32) -> Vec<f32> {
    let gall_1d = gall_1d as usize;
    let mut out = Vec::with_capacity((nmax * nmax) as usize);
    for j in 1..=nmax as usize {
        for i in 1..=nmax as usize {
            out.push(tile[gall_1d * j + i]);
        }
    }
    out
}

#[cfg(test)]
#[path = "./legacy_tests.rs"]
mod tests;
