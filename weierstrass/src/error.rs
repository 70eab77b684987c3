//! Error types.

use core::fmt;

/// Elliptic curve point errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Error from the underlying field arithmetic.
    Field(primefield::Error),

    /// Points belong to curves with different `a` or `b` coefficients.
    CurveMismatch,

    /// Coordinates do not satisfy the curve equation.
    NotOnCurve,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Field(err) => write!(f, "field error: {err}"),
            Error::CurveMismatch => f.write_str("points are not on the same curve"),
            Error::NotOnCurve => f.write_str("point is not on the curve"),
        }
    }
}

impl From<primefield::Error> for Error {
    fn from(err: primefield::Error) -> Error {
        Error::Field(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Field(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
