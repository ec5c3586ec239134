//! Panda container decoding: package header, per-variable directory, and
//! random access into one `(variable, step, level)` slice across every
//! region in the file.
//!
//! Header and directory are read eagerly at [`PandaReader::open`], so the
//! lifecycle this type models collapses the source format's
//! `Registered -> Opened -> HeaderRead -> DirectoryRead` chain into the
//! constructor; the only state transition an API consumer can observe is
//! into [`PandaReader::close`].

mod dinfo;
mod header;

pub use dinfo::{DataInfo, DataType};
pub use header::{Endian, FileMode, GridTopology, PackageHeader};

use crate::dims::GridDims;
use crate::error::{Error, NotFound, ShapeMismatch, UnsupportedConfiguration, Warning};
use crate::log::warn;
use crate::value::GridArray;
use byteorder::BigEndian;
use memmap2::{Mmap, MmapOptions};
use ndarray::Array2;
use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    DirectoryRead,
    Closed,
}

/// A panda container: its header, its variable directory, and a read-only
/// mapping of the payload region that follows.
pub struct PandaReader {
    path: PathBuf,
    header: PackageHeader,
    dinfo: Vec<DataInfo>,
    eoh: u64,
    mmap: Option<Mmap>,
    state: State,
}

impl PandaReader {
    /// Opens `path`, reading the package header and the full data-info
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read,
    /// [`Error::FormatViolation`] if the header or a directory record is
    /// malformed, and [`Error::UnsupportedConfiguration`] if the header
    /// declares a grid topology other than icosahedral.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path)?;

        let mut cursor = std::io::BufReader::new(&file);
        let header = PackageHeader::read(&mut cursor)?;
        if header.grid_topology != GridTopology::Icosahedron {
            return Err(UnsupportedConfiguration::new(
                format!("{:?}", header.grid_topology),
                "only the icosahedral grid topology is supported",
            )
            .into());
        }
        let eoh = cursor.stream_position()?;

        let mut dinfo = Vec::with_capacity(header.num_of_data as usize);
        let mut pos = eoh;
        for _ in 0..header.num_of_data {
            cursor.seek(SeekFrom::Start(pos))?;
            let info = DataInfo::read(&mut cursor)?;
            pos += dinfo::DINFO_SIZE + info.datasize;
            dinfo.push(info);
        }

        // SAFETY: the mapping is read-only; this reader never writes
        // through it and does not assume exclusive access to the backing
        // file, so a concurrent external write can only surface as a
        // garbled read, not as unsound memory access.
        #[allow(unsafe_code, reason = "memory-mapped read-only file access")]
        let mmap = unsafe { MmapOptions::new().map(&file)? };

        Ok(Self {
            path,
            header,
            dinfo,
            eoh,
            mmap: Some(mmap),
            state: State::DirectoryRead,
        })
    }

    /// The package header.
    #[must_use]
    pub const fn header(&self) -> &PackageHeader {
        &self.header
    }

    /// The variable directory, in on-disk order.
    #[must_use]
    pub fn dinfo(&self) -> &[DataInfo] {
        &self.dinfo
    }

    /// The path this reader was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Refinement parameters derived from the header.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if the declared levels are inconsistent.
    pub fn dims(&self) -> Result<GridDims, Error> {
        self.header.dims()
    }

    /// Locates the directory index of `(varname, step)`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no record matches.
    pub fn seek_datainfo(&self, varname: &str, step: u32) -> Result<usize, Error> {
        self.dinfo
            .iter()
            .position(|d| d.varname == varname && d.step == step)
            .ok_or_else(|| {
                NotFound::new(
                    format!("varname={varname}, step={step}"),
                    "variable/step not found in directory",
                )
                .into()
            })
    }

    /// Byte offset of record `did`'s payload.
    fn payload_offset(&self, did: usize) -> u64 {
        let mut offset = self.eoh;
        for info in &self.dinfo[..did] {
            offset += dinfo::DINFO_SIZE + info.datasize;
        }
        offset + dinfo::DINFO_SIZE
    }

    /// Extracts the `level`-th vertical layer of `varname` at `step`, for
    /// every region in the file, halo cropped.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `(varname, step)` is absent from the
    /// directory; [`Error::ShapeMismatch`] if the declared `datasize` does
    /// not match the header-derived shape, or if `level` is out of range;
    /// [`Error::Io`] if the reader has been [`close`](Self::close)d.
    pub fn read_pe(&self, varname: &str, step: u32, level: u32) -> Result<GridArray, Error> {
        if self.state == State::Closed {
            return Err(closed_error());
        }
        let mmap = self.mmap.as_ref().ok_or_else(closed_error)?;

        let did = self.seek_datainfo(varname, step)?;
        let info = &self.dinfo[did];
        let dims = self.dims()?;
        let gall = dims.gall() as usize;
        let num_of_rgn = self.header.num_of_rgn();
        let num_of_layer = info.num_of_layer as usize;

        let expected = (num_of_rgn * num_of_layer * gall * info.datatype.element_size()) as u64;
        if expected != info.datasize {
            return Err(ShapeMismatch::new(
                format!("datasize={}, expected={expected}", info.datasize),
                "declared datasize does not match header-derived (region, layer, gall) shape",
            )
            .into());
        }
        if level as usize >= num_of_layer {
            return Err(ShapeMismatch::new(
                format!("level={level}, num_of_layer={num_of_layer}"),
                "requested level exceeds num_of_layer",
            )
            .into());
        }

        let offset = self.payload_offset(did) as usize;
        let bytes = &mmap[offset..offset + info.datasize as usize];

        crop_layer(bytes, info.datatype, num_of_rgn, num_of_layer, level as usize, dims)
    }

    /// Cross-checks this file's header against a caller-supplied common
    /// reference (e.g. one derived from a sibling file in the same run),
    /// reporting disagreement instead of failing: two files disagreeing is
    /// a modeling inconsistency to surface, not evidence either file is
    /// corrupt.
    #[must_use]
    pub fn valid_pkginfo(&self, common: &PackageHeader) -> Vec<Warning> {
        let mut warnings = Vec::new();
        let header = &self.header;

        if header.grid_topology != common.grid_topology {
            warnings.push(Warning(format!(
                "grid_topology mismatch: {:?} vs {:?}",
                header.grid_topology, common.grid_topology
            )));
        }
        if header.glevel != common.glevel {
            warnings.push(Warning(format!(
                "glevel mismatch: {} vs {}",
                header.glevel, common.glevel
            )));
        }
        if header.rlevel != common.rlevel {
            warnings.push(Warning(format!(
                "rlevel mismatch: {} vs {}",
                header.rlevel, common.rlevel
            )));
        }
        if header.rgnid.len() != common.rgnid.len() {
            warnings.push(Warning(format!(
                "num_of_rgn mismatch: {} vs {}",
                header.rgnid.len(),
                common.rgnid.len()
            )));
        } else {
            for (i, (a, b)) in header.rgnid.iter().zip(&common.rgnid).enumerate() {
                if a != b {
                    warnings.push(Warning(format!("rgnid[{i}] mismatch: {a} vs {b}")));
                }
            }
        }

        for warning in &warnings {
            warn!("{}: {warning}", self.path.display());
        }
        warnings
    }

    /// Checks every directory record's declared `datasize` against the
    /// size its `(num_of_layer, num_of_rgn, gall)` shape implies.
    #[must_use]
    pub fn valid_datainfo(&self) -> Vec<Warning> {
        let Ok(dims) = self.header.dims() else {
            let warning = Warning("cannot validate datainfo: invalid glevel/rlevel".to_owned());
            warn!("{}: {warning}", self.path.display());
            return vec![warning];
        };
        let gall = dims.gall() as usize;
        let num_of_rgn = self.header.num_of_rgn();

        let warnings: Vec<Warning> = self
            .dinfo
            .iter()
            .filter_map(|info| {
                let expected =
                    (gall * info.num_of_layer as usize * num_of_rgn * info.datatype.element_size())
                        as u64;
                (info.datasize != expected).then(|| {
                    Warning(format!(
                        "{}: datasize={} does not match {gall}[grid] x {}[layer] x \
                         {num_of_rgn}[region] x {}[bytes] = {expected}",
                        info.varname,
                        info.datasize,
                        info.num_of_layer,
                        info.datatype.element_size()
                    ))
                })
            })
            .collect();

        for warning in &warnings {
            warn!("{}: {warning}", self.path.display());
        }
        warnings
    }

    /// Releases the file mapping. Idempotent; safe to call multiple times
    /// or not at all (resources are also released on drop).
    pub fn close(&mut self) {
        self.mmap = None;
        self.state = State::Closed;
    }
}

fn closed_error() -> Error {
    std::io::Error::new(std::io::ErrorKind::Other, "panda reader is closed").into()
}

/// Decodes one variable's full payload and crops it down to
/// `(num_of_rgn, gall_in)` at the requested `level`.
fn crop_layer(
    bytes: &[u8],
    datatype: DataType,
    num_of_rgn: usize,
    num_of_layer: usize,
    level: usize,
    dims: GridDims,
) -> Result<GridArray, Error> {
    let gall = dims.gall() as usize;
    let gall_in = dims.gall_in() as usize;
    let total = num_of_rgn * num_of_layer * gall;

    macro_rules! decode {
        ($elem:ty, $read_into:path, $variant:ident) => {{
            let mut flat = vec![<$elem>::default(); total];
            $read_into(bytes, &mut flat);
            let cropped = crop_regions(&flat, num_of_rgn, num_of_layer, gall, level, dims);
            let array = Array2::from_shape_vec((num_of_rgn, gall_in), cropped)
                .expect("cropped length matches num_of_rgn * gall_in");
            Ok(GridArray::$variant(array))
        }};
    }

    match datatype {
        DataType::Real4 => decode!(f32, BigEndian::read_f32_into, Real4),
        DataType::Real8 => decode!(f64, BigEndian::read_f64_into, Real8),
        DataType::Integer4 => decode!(i32, BigEndian::read_i32_into, Int4),
        DataType::Integer8 => decode!(i64, BigEndian::read_i64_into, Int8),
    }
}

/// Crops every region's `level`-th layer down to its interior cells,
/// returning a flat `(num_of_rgn * gall_in)` buffer in region-major order.
fn crop_regions<T: Copy>(
    flat: &[T],
    num_of_rgn: usize,
    num_of_layer: usize,
    gall: usize,
    level: usize,
    dims: GridDims,
) -> Vec<T> {
    let nmax = dims.nmax();
    let mut out = Vec::with_capacity(num_of_rgn * dims.gall_in() as usize);

    for region in 0..num_of_rgn {
        let base = (region * num_of_layer + level) * gall;
        for j in 1..=nmax {
            for i in 1..=nmax {
                out.push(flat[base + dims.linear_index(i, j)]);
            }
        }
    }

    out
}

#[cfg(test)]
#[path = "./mod_tests.rs"]
mod tests;
