//! Error types.

use core::fmt;

/// Field arithmetic errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Value is not in the range `[0, prime)`.
    OutOfRange,

    /// Operands belong to fields with different primes.
    FieldMismatch,

    /// Zero has no multiplicative inverse.
    NotInvertible,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfRange => f.write_str("field element out of range"),
            Error::FieldMismatch => f.write_str("field elements belong to different fields"),
            Error::NotInvertible => f.write_str("zero has no multiplicative inverse"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
