//! Error types.

use core::fmt;

/// secp256k1 errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Error from the underlying point arithmetic.
    Curve(weierstrass::Error),

    /// SEC1 point encoding has an unknown prefix or the wrong length.
    InvalidEncoding,

    /// DER signature is structurally invalid.
    MalformedSignature,

    /// Secret scalar is zero or not below the group order.
    InvalidKey,

    /// Signing produced `r = 0` or `s = 0`.
    DegenerateSignature,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Curve(err) => write!(f, "curve error: {err}"),
            Error::InvalidEncoding => f.write_str("invalid SEC1 point encoding"),
            Error::MalformedSignature => f.write_str("malformed DER signature"),
            Error::InvalidKey => f.write_str("invalid secret key"),
            Error::DegenerateSignature => f.write_str("signature has a zero component"),
        }
    }
}

impl From<weierstrass::Error> for Error {
    fn from(err: weierstrass::Error) -> Error {
        Error::Curve(err)
    }
}

impl From<primefield::Error> for Error {
    fn from(err: primefield::Error) -> Error {
        Error::Curve(err.into())
    }
}

impl From<Error> for signature::Error {
    fn from(_: Error) -> signature::Error {
        signature::Error::new()
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Curve(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
