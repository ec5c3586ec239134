//! Binary decoding shared by the legacy grid and data-file readers:
//! Fortran sequential-access record framing, plus bulk big-endian array
//! reads via `byteorder`.

use crate::error::{Error, FormatViolation};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

/// Reads one Fortran sequential-access record: a big-endian `i32` byte
/// count, that many payload bytes, then a trailing `i32` repeating the same
/// count.
///
/// # Errors
///
/// [`Error::Io`] if the underlying read fails; [`Error::FormatViolation`] if
/// the leading count is negative or the trailing count does not match it.
pub(crate) fn read_fortran_record<R: Read>(reader: &mut R) -> Result<Vec<u8>, Error> {
    let header = reader.read_i32::<BigEndian>()?;
    let len = usize::try_from(header).map_err(|_| {
        FormatViolation::new(
            format!("record header={header}"),
            "Fortran record length is negative",
        )
    })?;

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)?;

    let footer = reader.read_i32::<BigEndian>()?;
    if usize::try_from(footer) != Ok(len) {
        return Err(FormatViolation::new(
            format!("header={len}, footer={footer}"),
            "Fortran sequential record framing mismatch",
        )
        .into());
    }

    Ok(payload)
}

/// Decodes a record payload as `count` big-endian `f64`s.
///
/// # Errors
///
/// [`Error::FormatViolation`] if `bytes` holds fewer than `count * 8` bytes.
pub(crate) fn decode_f64_array(bytes: &[u8], count: usize) -> Result<Vec<f64>, Error> {
    let expected = count * 8;
    if bytes.len() != expected {
        return Err(FormatViolation::new(
            format!("record length={}", bytes.len()),
            "record payload does not hold the expected number of f64 values",
        )
        .into());
    }

    let mut out = vec![0.0_f64; count];
    BigEndian::read_f64_into(bytes, &mut out);
    Ok(out)
}

/// Decodes a record payload as one big-endian `i32`.
///
/// # Errors
///
/// [`Error::FormatViolation`] if `bytes` does not hold exactly 4 bytes.
pub(crate) fn decode_i32_scalar(bytes: &[u8]) -> Result<i32, Error> {
    if bytes.len() != 4 {
        return Err(FormatViolation::new(
            format!("record length={}", bytes.len()),
            "record payload is not a single i32",
        )
        .into());
    }

    Ok(BigEndian::read_i32(bytes))
}

#[cfg(test)]
#[path = "./io_tests.rs"]
mod tests;
