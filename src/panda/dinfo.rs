//! Per-variable directory entries: the fixed-layout record immediately
//! preceding each variable's payload.

use super::header::{read_ascii, HLONG, HMID, HSHORT};
use crate::error::{Error, FormatViolation};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

/// Byte size of one data-info record, payload excluded: three short ASCII
/// fields, one mid and one long field, three `i64`s, and three `i32`s.
pub(crate) const DINFO_SIZE: u64 = (3 * HSHORT + HMID + HLONG + 3 * 8 + 3 * 4) as u64;

/// The on-disk element type a variable's payload is encoded in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
#[repr(u8)]
pub enum DataType {
    /// `FIO_REAL4`: 4-byte IEEE 754 float.
    Real4,
    /// `FIO_REAL8`: 8-byte IEEE 754 float.
    Real8,
    /// `FIO_INTEGER4`: 4-byte signed integer.
    Integer4,
    /// `FIO_INTEGER8`: 8-byte signed integer.
    Integer8,
}

impl DataType {
    /// Byte size of one element of this type.
    #[must_use]
    pub const fn element_size(self) -> usize {
        match self {
            Self::Real4 | Self::Integer4 => 4,
            Self::Real8 | Self::Integer8 => 8,
        }
    }
}

impl TryFrom<i32> for DataType {
    type Error = FormatViolation;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Real4),
            1 => Ok(Self::Real8),
            2 => Ok(Self::Integer4),
            3 => Ok(Self::Integer8),
            other => Err(FormatViolation::new(
                format!("datatype={other}"),
                "unrecognized data type",
            )),
        }
    }
}

/// One variable's directory entry: metadata plus where (implicitly, right
/// after this record) and how large its payload is.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataInfo {
    /// Variable name.
    pub varname: String,
    /// Free-text description.
    pub description: String,
    /// Physical unit.
    pub unit: String,
    /// Vertical-layer naming scheme.
    pub layername: String,
    /// Free-text note.
    pub note: String,
    /// Payload size in bytes.
    pub datasize: u64,
    /// On-disk element type.
    pub datatype: DataType,
    /// Number of vertical layers.
    pub num_of_layer: u32,
    /// Time step index.
    pub step: u32,
    /// Start of the validity interval this step represents.
    pub time_start: i64,
    /// End of the validity interval this step represents.
    pub time_end: i64,
}

impl DataInfo {
    /// Reads one data-info record from the current position of `reader`.
    pub(crate) fn read<R: Read>(reader: &mut R) -> Result<Self, Error> {
        let varname = read_ascii(reader, HSHORT)?;
        let description = read_ascii(reader, HMID)?;
        let unit = read_ascii(reader, HSHORT)?;
        let layername = read_ascii(reader, HSHORT)?;
        let note = read_ascii(reader, HLONG)?;

        let datasize = reader.read_i64::<BigEndian>()?;
        let datasize = u64::try_from(datasize).map_err(|_| {
            FormatViolation::new(format!("datasize={datasize}"), "negative datasize")
        })?;

        let datatype = DataType::try_from(reader.read_i32::<BigEndian>()?)?;

        let num_of_layer = reader.read_i32::<BigEndian>()?;
        let num_of_layer = u32::try_from(num_of_layer).map_err(|_| {
            FormatViolation::new(
                format!("num_of_layer={num_of_layer}"),
                "negative layer count",
            )
        })?;

        let step = reader.read_i32::<BigEndian>()?;
        let step = u32::try_from(step)
            .map_err(|_| FormatViolation::new(format!("step={step}"), "negative step index"))?;

        let time_start = reader.read_i64::<BigEndian>()?;
        let time_end = reader.read_i64::<BigEndian>()?;

        Ok(Self {
            varname,
            description,
            unit,
            layername,
            note,
            datasize,
            datatype,
            num_of_layer,
            step,
            time_start,
            time_end,
        })
    }
}

#[cfg(test)]
#[path = "./dinfo_tests.rs"]
mod tests;
