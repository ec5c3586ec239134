//! Error types returned by grid, field and container readers.

mod detail;

pub use detail::{
    FormatViolation, InvalidParameter, NotFound, ShapeMismatch,
    UnsupportedConfiguration,
};

use std::{fmt, io};

/// Top-level error produced by this crate.
///
/// Each variant corresponds to one bucket of the error taxonomy: parameter
/// validation, I/O, binary-layout violations, missing directory entries,
/// declared/actual size mismatches, and configuration options that are
/// recognized but deliberately unimplemented.
#[derive(Debug)]
pub enum Error {
    /// `glevel < rlevel`, a negative refinement level, or a level spread that
    /// would overflow `nmax^2`.
    InvalidParameter(InvalidParameter),
    /// The underlying file could not be opened or read.
    Io(io::Error),
    /// Framing bytes, string encoding, or an enumerated field did not match
    /// the expected binary layout.
    FormatViolation(FormatViolation),
    /// The requested `(varname, step)` is absent from the directory.
    NotFound(NotFound),
    /// A declared `datasize` does not match the header-derived shape.
    ShapeMismatch(ShapeMismatch),
    /// The caller asked for an option this crate recognizes but does not
    /// implement (e.g. `grid_iotype = ADVANCED`, `iotype = LEGACYS`).
    UnsupportedConfiguration(UnsupportedConfiguration),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O failure: {e}"),
            Self::FormatViolation(e) => write!(f, "{e}"),
            Self::NotFound(e) => write!(f, "{e}"),
            Self::ShapeMismatch(e) => write!(f, "{e}"),
            Self::UnsupportedConfiguration(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidParameter(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::FormatViolation(e) => Some(e),
            Self::NotFound(e) => Some(e),
            Self::ShapeMismatch(e) => Some(e),
            Self::UnsupportedConfiguration(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<InvalidParameter> for Error {
    fn from(value: InvalidParameter) -> Self {
        Self::InvalidParameter(value)
    }
}

impl From<FormatViolation> for Error {
    fn from(value: FormatViolation) -> Self {
        Self::FormatViolation(value)
    }
}

impl From<NotFound> for Error {
    fn from(value: NotFound) -> Self {
        Self::NotFound(value)
    }
}

impl From<ShapeMismatch> for Error {
    fn from(value: ShapeMismatch) -> Self {
        Self::ShapeMismatch(value)
    }
}

impl From<UnsupportedConfiguration> for Error {
    fn from(value: UnsupportedConfiguration) -> Self {
        Self::UnsupportedConfiguration(value)
    }
}

/// A non-fatal inconsistency surfaced while cross-checking a panda file's
/// header or directory against caller-supplied expectations.
///
/// `valid_pkginfo` and `valid_datainfo` report drift this way instead of
/// aborting, because it signals that two files disagree, not that either one
/// is corrupt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning(pub String);

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "./tests.rs"]
mod tests;
