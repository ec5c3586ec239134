//! The package header at the start of every panda file, and the small
//! enumerations its fixed fields encode.

use crate::dims::GridDims;
use crate::error::{Error, FormatViolation};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

/// Width, in bytes, of a "short" ASCII field (`varname`, `unit`,
/// `layername`).
pub(crate) const HSHORT: usize = 16;
/// Width, in bytes, of a "mid" ASCII field (`description`).
pub(crate) const HMID: usize = 64;
/// Width, in bytes, of a "long" ASCII field (`note`).
pub(crate) const HLONG: usize = 256;

/// Whether a panda file holds one region's worth of data (`Split`) or every
/// region a process owns, integrated into a single file (`Integrated`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
#[repr(u8)]
pub enum FileMode {
    /// One region per file.
    Split,
    /// Every region of a process, integrated into one file.
    Integrated,
}

impl TryFrom<i32> for FileMode {
    type Error = FormatViolation;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Split),
            1 => Ok(Self::Integrated),
            other => Err(FormatViolation::new(
                format!("fmode={other}"),
                "unrecognized file mode",
            )),
        }
    }
}

/// The byte order a header declares its payload to be encoded in. This
/// crate always decodes big-endian, per §6 of the format notes; a declared
/// little-endian file is a configuration this crate does not implement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
#[repr(u8)]
pub enum Endian {
    /// Declared but unspecified.
    Unknown,
    /// Little-endian payload (not implemented by this reader).
    Little,
    /// Big-endian payload.
    Big,
}

impl TryFrom<i32> for Endian {
    type Error = FormatViolation;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Little),
            2 => Ok(Self::Big),
            other => Err(FormatViolation::new(
                format!("endiantype={other}"),
                "unrecognized endian type",
            )),
        }
    }
}

/// The sphere-subdivision scheme a header declares. Only the icosahedral
/// topology is implemented by this crate's grid geometry; the other two are
/// recognized so a caller gets an [`crate::error::UnsupportedConfiguration`]
/// rather than a [`crate::error::FormatViolation`] on an otherwise
/// well-formed file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
#[repr(u8)]
pub enum GridTopology {
    /// The icosahedral grid this crate implements.
    Icosahedron,
    /// Latitude-longitude with a cubed-sphere-style pole cap (not
    /// implemented).
    IgaLcp,
    /// Latitude-longitude with a matched-pole-cap variant (not
    /// implemented).
    IgaMlcp,
}

impl TryFrom<i32> for GridTopology {
    type Error = FormatViolation;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Icosahedron),
            1 => Ok(Self::IgaLcp),
            2 => Ok(Self::IgaMlcp),
            other => Err(FormatViolation::new(
                format!("grid_topology={other}"),
                "unrecognized grid topology",
            )),
        }
    }
}

/// The fixed-field header at byte offset 0 of every panda file.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageHeader {
    /// Free-text description (NUL-padded ASCII, trailing NULs stripped).
    pub description: String,
    /// Free-text note.
    pub note: String,
    /// Split vs. integrated file layout.
    pub fmode: FileMode,
    /// Declared payload byte order.
    pub endiantype: Endian,
    /// Declared sphere-subdivision scheme.
    pub grid_topology: GridTopology,
    /// Grid subdivision level.
    pub glevel: u8,
    /// Region subdivision level.
    pub rlevel: u8,
    /// Region IDs held in this file.
    pub rgnid: Vec<i32>,
    /// Number of data-info records following the header.
    pub num_of_data: u32,
}

impl PackageHeader {
    /// Reads a package header from the current position of `reader`
    /// (expected to be offset 0).
    pub(crate) fn read<R: Read>(reader: &mut R) -> Result<Self, Error> {
        let description = read_ascii(reader, HMID)?;
        let note = read_ascii(reader, HLONG)?;
        let fmode = FileMode::try_from(reader.read_i32::<BigEndian>()?)?;
        let endiantype = Endian::try_from(reader.read_i32::<BigEndian>()?)?;
        let grid_topology = GridTopology::try_from(reader.read_i32::<BigEndian>()?)?;
        let glevel = read_level(reader)?;
        let rlevel = read_level(reader)?;
        let num_of_rgn = reader.read_i32::<BigEndian>()?;
        let num_of_rgn = usize::try_from(num_of_rgn).map_err(|_| {
            FormatViolation::new(format!("num_of_rgn={num_of_rgn}"), "negative region count")
        })?;

        let mut rgnid = Vec::with_capacity(num_of_rgn);
        for _ in 0..num_of_rgn {
            rgnid.push(reader.read_i32::<BigEndian>()?);
        }

        let num_of_data = reader.read_i32::<BigEndian>()?;
        let num_of_data = u32::try_from(num_of_data).map_err(|_| {
            FormatViolation::new(
                format!("num_of_data={num_of_data}"),
                "negative data record count",
            )
        })?;

        Ok(Self {
            description,
            note,
            fmode,
            endiantype,
            grid_topology,
            glevel,
            rlevel,
            rgnid,
            num_of_data,
        })
    }

    /// Refinement parameters derived from `glevel`/`rlevel`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if the declared levels are inconsistent
    /// (see [`GridDims::new`]).
    pub fn dims(&self) -> Result<GridDims, Error> {
        GridDims::new(self.glevel, self.rlevel).map_err(Into::into)
    }

    /// Number of regions declared in this header.
    #[must_use]
    pub fn num_of_rgn(&self) -> usize {
        self.rgnid.len()
    }
}

fn read_level<R: Read>(reader: &mut R) -> Result<u8, Error> {
    let value = reader.read_i32::<BigEndian>()?;
    u8::try_from(value)
        .map_err(|_| FormatViolation::new(format!("level={value}"), "refinement level out of range").into())
}

/// Reads a NUL-padded ASCII field of `len` bytes, stripping trailing NULs.
pub(crate) fn read_ascii<R: Read>(reader: &mut R, len: usize) -> Result<String, Error> {
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;
    let end = buf.iter().position(|&b| b == 0).unwrap_or(len);
    std::str::from_utf8(&buf[..end]).map(str::to_owned).map_err(|_| {
        FormatViolation::new(
            format!("{:?}", &buf[..end.min(32)]),
            "header field is not valid ASCII",
        )
        .into()
    })
}

#[cfg(test)]
#[path = "./header_tests.rs"]
mod tests;
